use crate::models::Book;

use super::markup::Element;

pub const SAVE_ACTION: &str = "save";
pub const REMOVE_ACTION: &str = "remove";

/// What a card button asks the page to do.
///
/// Each click maps to exactly one action. Nothing else on the card or its
/// containers reacts to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Save(Book),
    Remove(String),
}

fn action_button(label: &'static str, action: &'static str) -> Element {
    Element::new("button")
        .attr("type", "button")
        .attr("data-action", action)
        .text(label)
}

/// A result card with a Save button.
pub fn book_card(book: &Book) -> Element {
    let cover = Element::new("div").class("book-cover").child(
        Element::new("img")
            .attr("src", book.cover.as_str())
            .attr("alt", format!("{} cover", book.title)),
    );

    let content = Element::new("div")
        .class("book-content")
        .attr("data-title", book.title.as_str())
        .child(Element::new("h3").class("book-title").text(book.title.as_str()))
        .child(Element::new("p").class("book-author").text(book.author.as_str()))
        .child(
            Element::new("p")
                .class("book-description")
                .text(book.description.as_str()),
        )
        .child(
            Element::new("a")
                .class("book-learn-more")
                .attr("href", book.link.as_str())
                .attr("target", "_blank")
                .attr("rel", "noopener")
                .text("Learn More"),
        )
        .child(action_button("Save", SAVE_ACTION));

    Element::new("div")
        .class("book-card")
        .child(cover)
        .child(content)
}

/// A favorites card: the result card plus a Remove button.
pub fn favorite_card(book: &Book) -> Element {
    book_card(book).child(action_button("Remove", REMOVE_ACTION))
}
