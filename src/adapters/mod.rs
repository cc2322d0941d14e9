// Adapters layer: concrete implementations for external systems (feed, storage, html page).

pub mod feed;
pub mod html;
pub mod storage;
