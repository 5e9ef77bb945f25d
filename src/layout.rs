/// Width applied to the host viewport slot the container renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Width {
    #[default]
    Auto,
    Full,
}

/// Viewport layout capability injected by the host.
///
/// The container widens its slot to the full page width while mounted and
/// restores whatever `set_width` returned on teardown.
pub trait ViewportLayout {
    /// Apply a width and return the previous one.
    fn set_width(&mut self, width: Width) -> Width;
}

impl<L: ViewportLayout> ViewportLayout for std::rc::Rc<std::cell::RefCell<L>> {
    fn set_width(&mut self, width: Width) -> Width {
        self.borrow_mut().set_width(width)
    }
}

/// Plain layout state for hosts without their own implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageLayout {
    width: Width,
}

impl PageLayout {
    pub const fn width(&self) -> Width {
        self.width
    }
}

impl ViewportLayout for PageLayout {
    fn set_width(&mut self, width: Width) -> Width {
        std::mem::replace(&mut self.width, width)
    }
}
