//! Batch evaluation of many opponent selections against one roster

mod processor;

pub use processor::{
    clean_selection, parse_selection_line, process_selections, read_selection_file,
    render_batch, BatchEntry, BatchStats, Selection, PLACEHOLDERS,
};
