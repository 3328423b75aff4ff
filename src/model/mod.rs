mod resolver;
mod table;

pub(crate) use resolver::resolve_label;
pub(crate) use table::ModelTable;
