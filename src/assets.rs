//! Enemy image pool with fire-and-forget loading
//!
//! Images load asynchronously in the browser; the simulation never waits on
//! them. Each slot exposes a polled readiness flag, and the renderer falls
//! back to a flat class color for slots that have not finished loading.
//! The non-wasm build keeps the same surface with every slot unready, so
//! headless runs exercise the fallback path.

use crate::consts::ENEMY_IMAGE_COUNT;

#[cfg(target_arch = "wasm32")]
mod imp {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::HtmlImageElement;

    /// One image slot: the element plus a flag flipped by its `onload`
    pub struct Slot {
        pub element: HtmlImageElement,
        pub ready: Rc<Cell<bool>>,
    }

    impl Slot {
        pub fn load(index: usize) -> Option<Slot> {
            let element = HtmlImageElement::new()
                .map_err(|e| log::warn!("Failed to create image element: {e:?}"))
                .ok()?;
            let ready = Rc::new(Cell::new(false));

            let flag = ready.clone();
            let onload = Closure::<dyn FnMut()>::new(move || {
                flag.set(true);
                log::info!("Enemy image {} loaded", index + 1);
            });
            element.set_onload(Some(onload.as_ref().unchecked_ref()));
            onload.forget();

            element.set_src(&format!("sample_image/enemy_icon_{}.jpeg", index + 1));
            Some(Slot { element, ready })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    /// Headless stand-in; never becomes ready
    pub struct Slot;

    impl Slot {
        pub fn load(_index: usize) -> Option<Slot> {
            Some(Slot)
        }
    }
}

/// Fixed-size indexed pool of enemy images
pub struct EnemyImages {
    slots: Vec<imp::Slot>,
}

impl EnemyImages {
    /// Kick off loading for the whole pool; returns immediately
    pub fn load() -> Self {
        let slots = (0..ENEMY_IMAGE_COUNT)
            .filter_map(imp::Slot::load)
            .collect();
        Self { slots }
    }

    /// Whether the image at `index` has finished loading
    pub fn is_ready(&self, index: usize) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            self.slots
                .get(index)
                .is_some_and(|slot| slot.ready.get())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = index;
            false
        }
    }

    /// Opaque handle for the renderer; `None` until the slot is ready
    #[cfg(target_arch = "wasm32")]
    pub fn get(&self, index: usize) -> Option<&web_sys::HtmlImageElement> {
        self.slots
            .get(index)
            .filter(|slot| slot.ready.get())
            .map(|slot| &slot.element)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_headless_pool_reports_unready() {
        let images = EnemyImages::load();
        assert_eq!(images.len(), ENEMY_IMAGE_COUNT);
        for i in 0..images.len() {
            assert!(!images.is_ready(i), "headless slots stay on the fallback");
        }
        assert!(!images.is_ready(999));
    }
}
