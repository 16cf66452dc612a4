use std::sync::{Arc, Mutex, MutexGuard};

use tracing::info;

use poly_ticker_core::{NavigationPort, PortError};

/// Records redirects for the shell to act on between frames.
#[derive(Debug, Clone, Default)]
pub struct NavigationAdapter {
    pending: Arc<Mutex<Option<String>>>,
}

impl NavigationAdapter {
    fn lock(&self) -> Result<MutexGuard<'_, Option<String>>, PortError> {
        self.pending
            .lock()
            .map_err(|e| PortError::Transport(format!("navigation lock poisoned: {e}")))
    }

    /// Take the latest requested path, if any.
    pub fn take_redirect(&self) -> Result<Option<String>, PortError> {
        Ok(self.lock()?.take())
    }
}

impl NavigationPort for NavigationAdapter {
    fn redirect_to(&self, path: &str) -> Result<(), PortError> {
        let mut g = self.lock()?;
        if g.as_deref() != Some(path) {
            info!(path, "redirect requested");
        }
        *g = Some(path.to_owned());
        Ok(())
    }
}
