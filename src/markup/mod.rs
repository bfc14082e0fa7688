pub(crate) mod document;
pub(crate) mod parse;
pub(crate) mod path_data;
