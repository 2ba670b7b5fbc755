use barfhtml::{bumpalo::Bump, Barf, LogDiagnostics};

fn main() {
    let bump = Bump::new();
    let diagnostics = LogDiagnostics;
    let b = Barf::new(&bump).with_diagnostics(&diagnostics);

    println!("Plain serialize calls:");
    let output = b.serialize(
        "div",
        [],
        [b.serialize(
            "a",
            [b.attr(("href", "http://www.example.com"))],
            [b.serialize(
                "p",
                [b.attr(("style", b.css([("fontSize", "12px")])))],
                "Hello World!",
                Default::default(),
            )],
            Default::default(),
        )],
        Default::default(),
    );
    println!("{output}");
    println!();

    println!("Shortcuts:");
    let output = b.div(
        [],
        [b.a(
            [b.attr(("href", "http://www.example.com"))],
            [
                b.p(
                    [b.attr(("style", b.css([("fontSize", "12px")])))],
                    "Hello World!",
                ),
                b.p([], "More hellos!"),
            ],
        )],
    );
    println!("{output}");
    println!();

    println!("A full page with an injected stylesheet:");
    let stylesheet = b.rule(
        "body",
        &b.css([
            ("backgroundColor", "#1d1d1d"),
            ("position", "relative"),
            ("width", "100%"),
            ("height", "100%"),
        ]),
    );
    let page = b.html(
        [],
        [
            b.head(
                [],
                [
                    b.meta([b.attr(("charset", "utf-8"))], ()),
                    b.title([], "barfhtml"),
                    b.style([], [stylesheet]),
                ],
            ),
            b.body(
                [],
                [
                    b.h1([], "barfhtml"),
                    b.img([b.attr(("src", "logo.png")), b.attr(("alt", "logo"))], ()),
                    b.p([], b.text("Escaped on request: <b> & friends")),
                ],
            ),
        ],
    );
    println!("{page}");
}
