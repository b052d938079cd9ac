use web_sys as web;

use crate::constants::INSTRUCTIONS_ID;

#[inline]
pub fn set_instructions(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(INSTRUCTIONS_ID) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn instructions(document: &web::Document) -> Option<String> {
    document
        .get_element_by_id(INSTRUCTIONS_ID)
        .and_then(|el| el.text_content())
}
