//! Example: Building an accessible signup form

use lark_html::{
    NoEvent, Node, attr, checkbox, div, h1, img, input_email, label_after, label_before,
    label_hidden, input_text, text,
};

fn main() {
    // Initialize logging; builder diagnostics land here
    tracing_subscriber::fmt::init();

    let form: Node<NoEvent> = div(
        vec![attr("class", "signup")],
        vec![
            img("Lark logo", vec![attr("src", "/logo.svg")]),
            h1(vec![], vec![text("Create an account")]),
            label_before(
                vec![],
                text("Full name"),
                input_text("", vec![attr("name", "name")]),
            ),
            label_before(
                vec![],
                text("Email address"),
                input_email("", false, vec![attr("name", "email")]),
            ),
            label_hidden(
                "promo-code",
                vec![],
                text("Promo code"),
                input_text("", vec![attr("id", "promo-code"), attr("name", "promo")]),
            ),
            label_after(
                vec![],
                text("Subscribe to the newsletter"),
                checkbox("subscribe", Some(false), vec![attr("name", "subscribe")]),
            ),
        ],
    );

    println!("{}", form.to_html());
}
