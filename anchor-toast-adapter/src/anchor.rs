use crate::{AnchorId, ToastController};

/// Wraps the widget a toast is anchored to and keeps the controller pointed at it.
///
/// Drive it from the host's widget lifecycle:
/// - `mount` when the widget enters the tree
/// - `rebuild` on every rebuild/relayout (re-claims the controller if another anchor took it)
/// - `update_controller` when the widget is rebuilt with a different controller
/// - `unmount` when the widget leaves the tree (also done on drop)
pub struct ToastAnchor<C: 'static, W> {
    controller: ToastController<C>,
    id: AnchorId,
    child: W,
    mounted: bool,
}

impl<C: 'static, W> ToastAnchor<C, W> {
    pub fn new(controller: ToastController<C>, child: W) -> Self {
        Self::with_id(controller, AnchorId::next(), child)
    }

    /// Uses a host-provided id, e.g. the id of the widget's render node.
    pub fn with_id(controller: ToastController<C>, id: AnchorId, child: W) -> Self {
        Self {
            controller,
            id,
            child,
            mounted: false,
        }
    }

    pub fn id(&self) -> AnchorId {
        self.id
    }

    pub fn controller(&self) -> &ToastController<C> {
        &self.controller
    }

    pub fn child(&self) -> &W {
        &self.child
    }

    pub fn child_mut(&mut self) -> &mut W {
        &mut self.child
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn mount(&mut self) {
        self.mounted = true;
        self.controller.register_anchor(self.id);
    }

    pub fn rebuild(&mut self) {
        if self.mounted {
            self.controller.register_anchor(self.id);
        }
    }

    /// Swaps the controller this anchor registers with.
    pub fn update_controller(&mut self, controller: ToastController<C>) {
        if !self.controller.ptr_eq(&controller) {
            self.controller.unregister_anchor(self.id);
            self.controller = controller;
        }
        self.rebuild();
    }

    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.controller.unregister_anchor(self.id);
    }
}

impl<C: 'static, W> Drop for ToastAnchor<C, W> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<C: 'static, W: core::fmt::Debug> core::fmt::Debug for ToastAnchor<C, W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ToastAnchor")
            .field("id", &self.id)
            .field("mounted", &self.mounted)
            .field("child", &self.child)
            .finish_non_exhaustive()
    }
}
