pub mod json_report_store;
pub mod word_list;

pub use json_report_store::JsonReportChannelStore;
pub use word_list::load_bad_words;
