//! UI Components
//!
//! Reusable Leptos components.

mod client_info_form;
mod line_items_form;
mod free_items_form;
mod terms_form;
mod quote_preview;
mod save_dialog;
mod saved_quotations;
mod delete_quotation_button;

pub use client_info_form::ClientInfoForm;
pub use line_items_form::LineItemsForm;
pub use free_items_form::FreeItemsForm;
pub use terms_form::TermsForm;
pub use quote_preview::QuotePreview;
pub use save_dialog::SaveDialog;
pub use saved_quotations::SavedQuotations;
pub use delete_quotation_button::DeleteQuotationButton;
