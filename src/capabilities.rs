use log::debug;

/// Which renderers this process can use, decided once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub table_renderer: bool,
    pub plot_renderer: bool,
}

impl Capabilities {
    /// Check the compiled-in renderers and, for plots, that a display exists.
    pub fn detect() -> Self {
        let capabilities = Capabilities {
            table_renderer: cfg!(feature = "table"),
            plot_renderer: cfg!(feature = "plot") && display_available(),
        };
        debug!("renderer capabilities: {capabilities:?}");
        capabilities
    }

    /// No renderer at all; every render call only prints a message.
    pub fn none() -> Self {
        Capabilities {
            table_renderer: false,
            plot_renderer: false,
        }
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn display_available() -> bool {
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn display_available() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_capability_follows_feature() {
        assert_eq!(Capabilities::detect().table_renderer, cfg!(feature = "table"));
        assert!(!Capabilities::none().plot_renderer);
    }
}
