use log::debug;

/// Receives every table rendering produced while a document is built
pub trait TableObserver {
    fn on_table_rendered(&self, rendered: &str);
}

impl<F> TableObserver for F
where
    F: Fn(&str),
{
    fn on_table_rendered(&self, rendered: &str) {
        self(rendered)
    }
}

/// Forwards table renderings to the log at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTableObserver;

impl TableObserver for LogTableObserver {
    fn on_table_rendered(&self, rendered: &str) {
        debug!("Rendered table:\n{}", rendered);
    }
}
