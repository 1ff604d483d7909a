//! Navbar dropdowns and the mobile menu.

/// Open state of the navbar dropdowns; at most one is open at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenus {
    open: Option<usize>,
}

impl NavMenus {
    /// Toggle menu `id`, closing any other open menu.
    pub fn toggle(&mut self, id: usize) {
        self.open = if self.open == Some(id) { None } else { Some(id) };
    }

    /// Click landed outside every `.navbar-dropdown`.
    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, id: usize) -> bool {
        self.open == Some(id)
    }

    pub fn chevron_class(&self, id: usize) -> &'static str {
        if self.is_open(id) {
            "fas fa-chevron-up"
        } else {
            "fas fa-chevron-down"
        }
    }
}

/// Mobile slide-in menu. While open, the page body must not scroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for `document.body.style.overflow`.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }

    /// Class list shared by the menu and its overlay.
    pub fn class(&self, base: &str) -> String {
        if self.open {
            format!("{base} open")
        } else {
            base.to_string()
        }
    }
}
