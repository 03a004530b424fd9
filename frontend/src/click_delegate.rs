use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::navigation::fragment_target;

/// Something a single listener can be attached to and later detached from.
pub trait ListenerHost {
    type Handle;

    fn attach(&self) -> Self::Handle;
    fn detach(&self, handle: Self::Handle);
}

/// Keeps one listener attached for as long as the guard lives.
pub struct ListenerGuard<H: ListenerHost> {
    host: H,
    handle: Option<H::Handle>,
}

impl<H: ListenerHost> ListenerGuard<H> {
    pub fn attach(host: H) -> Self {
        let handle = host.attach();
        Self {
            host,
            handle: Some(handle),
        }
    }
}

impl<H: ListenerHost> Drop for ListenerGuard<H> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.host.detach(handle);
        }
    }
}

/// Document-level click listener that turns fragment link clicks into
/// `on_fragment(id)` calls.
pub struct DocumentClicks {
    document: Document,
    on_fragment: Rc<dyn Fn(&str)>,
}

impl DocumentClicks {
    pub fn new(document: Document, on_fragment: impl Fn(&str) + 'static) -> Self {
        Self {
            document,
            on_fragment: Rc::new(on_fragment),
        }
    }
}

/// `None` when registration failed; detaching is then a no-op.
pub type ClickHandle = Option<Closure<dyn FnMut(MouseEvent)>>;

impl ListenerHost for DocumentClicks {
    type Handle = ClickHandle;

    fn attach(&self) -> ClickHandle {
        let on_fragment = self.on_fragment.clone();
        let callback = Closure::wrap(Box::new(move |e: MouseEvent| {
            // Anything that is not a `#name` link keeps the default browser action
            if let Some(id) = clicked_fragment(&e) {
                e.prevent_default();
                on_fragment(&id);
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        match self
            .document
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        {
            Ok(()) => Some(callback),
            Err(err) => {
                warn!("Could not register click listener: {:?}", err);
                None
            }
        }
    }

    fn detach(&self, handle: ClickHandle) {
        let Some(callback) = handle else {
            return;
        };
        if let Err(err) = self
            .document
            .remove_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        {
            warn!("Could not remove click listener: {:?}", err);
        }
    }
}

/// Section id of the fragment link the click landed in, if any.
fn clicked_fragment(e: &MouseEvent) -> Option<String> {
    let origin = e.target()?.dyn_into::<Element>().ok()?;
    let link = origin.closest("a").ok()??;
    // Raw attribute, not the resolved URL: only `#name` written in the page counts
    let href = link.get_attribute("href")?;
    fragment_target(&href).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, Default)]
    struct CountingHost {
        active: Rc<Cell<i32>>,
        attached: Rc<Cell<u32>>,
        detached: Rc<Cell<u32>>,
    }

    impl ListenerHost for CountingHost {
        type Handle = u32;

        fn attach(&self) -> u32 {
            self.active.set(self.active.get() + 1);
            self.attached.set(self.attached.get() + 1);
            self.attached.get()
        }

        fn detach(&self, _handle: u32) {
            self.active.set(self.active.get() - 1);
            self.detached.set(self.detached.get() + 1);
        }
    }

    #[test]
    fn guard_attaches_once_and_detaches_on_drop() {
        let host = CountingHost::default();
        let guard = ListenerGuard::attach(host.clone());
        assert_eq!(host.active.get(), 1);

        drop(guard);
        assert_eq!(host.active.get(), 0);
        assert_eq!(host.attached.get(), 1);
        assert_eq!(host.detached.get(), 1);
    }

    #[test]
    fn repeated_mounts_do_not_accumulate_listeners() {
        let host = CountingHost::default();

        for _ in 0..5 {
            let guard = ListenerGuard::attach(host.clone());
            assert_eq!(host.active.get(), 1);
            drop(guard);
        }

        assert_eq!(host.active.get(), 0);
        assert_eq!(host.attached.get(), 5);
        assert_eq!(host.detached.get(), 5);
    }

    #[test]
    fn remounting_before_unmount_still_balances() {
        let host = CountingHost::default();

        let guards: Vec<_> = (0..3).map(|_| ListenerGuard::attach(host.clone())).collect();
        assert_eq!(host.active.get(), 3);

        drop(guards);
        assert_eq!(host.active.get(), 0);
    }
}
