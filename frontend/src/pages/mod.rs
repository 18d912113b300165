pub mod not_found_page;
pub mod quotation_list_page;
pub mod shared_quotation_page;
pub mod view_pdf_page;
