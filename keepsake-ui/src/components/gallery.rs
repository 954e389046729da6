//! Gallery widget: revealable thumbnail grid plus lightbox viewer
//!
//! `GalleryState` decides what happens; this component carries out the side
//! effects it asks for:
//! - staggered reveal tween the first time the widget becomes active
//! - entrance, exit and slide tweens on the lightbox media element
//! - page scroll lock while the lightbox is open
//! - window `keydown` listener (Escape / ArrowLeft / ArrowRight)

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use keepsake_common::{
    default_media, Entrance, GalleryState, LightboxCommand, MediaItem, MotionConfig,
    NavDirection, NavStep, TransitionToken,
};
use tracing::{debug, info, warn};

use crate::animator::{Animator, AnimatorHandle, OnComplete, TweenHandle};
use crate::components::{CameraIcon, GalleryThumbnail, LightboxView};
use crate::error::AnimationError;
use crate::media_handle::MediaHandle;
use crate::page_chrome::{PageChrome, ScrollLockGuard};
use crate::wasm_utils::{event_key, sleep_ms, EventListener};

/// Gallery section with a lightbox
///
/// `is_active` tells whether the section is the one currently on screen.
/// Items are fixed for the widget's lifetime.
#[component]
pub fn Gallery(
    is_active: ReadSignal<bool>,
    #[props(default = default_media())] items: Vec<MediaItem>,
) -> Element {
    let animator = try_use_context::<AnimatorHandle>().unwrap_or_default();
    let motion = try_use_context::<MotionConfig>().unwrap_or_default();
    let item_count = items.len();

    let controller = LightboxController {
        state: use_signal(|| GalleryState::new(item_count)),
        items: use_signal(|| items.clone()),
        media: use_signal(|| None),
        tween: use_signal(|| None),
        animator: use_signal(|| animator),
        motion: use_signal(|| motion),
    };
    let mut thumbs: Signal<Vec<Option<web_sys_x::Element>>> =
        use_signal(|| vec![None; item_count]);
    let mut scroll_guard: Signal<Option<ScrollLockGuard>> = use_signal(|| None);
    let mut key_listener: Signal<Option<EventListener>> = use_signal(|| None);

    // Reveal once every tile is mounted and the section is on screen
    use_effect(move || {
        let active = is_active();
        if !thumbs.read().iter().all(Option::is_some) {
            return;
        }
        let mut state = controller.state;
        if !state.write().begin_reveal(active) {
            return;
        }

        let motion = controller.motion.peek().clone();
        let flag_delay = u64::try_from(motion.reveal_flag_delay.as_millis()).unwrap_or(u64::MAX);
        spawn(async move {
            sleep_ms(flag_delay).await;
            state.write().finish_reveal();
        });

        let targets: Vec<web_sys_x::Element> = thumbs.peek().iter().flatten().cloned().collect();
        info!("Revealing {} gallery items", targets.len());
        controller.run_tween(
            |animator, done| {
                animator.animate_from_to(
                    &targets,
                    &motion.reveal_from,
                    &motion.reveal_to,
                    &motion.reveal,
                    done,
                )
            },
            || debug!("Gallery reveal finished"),
        );
    });

    // Page scroll follows the lightbox
    use_effect(move || {
        let open = controller.state.read().is_lightbox_open();
        if open == scroll_guard.peek().is_some() {
            return;
        }
        scroll_guard.set(open.then(PageChrome::lock_scroll));
    });

    // Window keyboard shortcuts, attached for the widget's lifetime
    use_effect(move || {
        // The listener fires from wasm-bindgen, outside the Dioxus runtime
        let runtime = Runtime::current();
        let listener = EventListener::on_window("keydown", move |event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let Some(key) = event_key(&event) else {
                return;
            };
            // Signals may already be gone if the widget unmounted first
            let Ok(state) = controller.state.try_read() else {
                return;
            };
            let command = state.command_for_key(&key);
            drop(state);

            match command {
                Some(LightboxCommand::Close) => controller.close(),
                Some(LightboxCommand::Prev) => controller.navigate(NavDirection::Prev),
                Some(LightboxCommand::Next) => controller.navigate(NavDirection::Next),
                None => {}
            }
        });
        if listener.is_none() {
            warn!("No window available, gallery keyboard shortcuts disabled");
        }
        key_listener.set(listener);
    });

    use_drop(move || {
        controller.cancel_tween();
        key_listener.write().take();
        scroll_guard.write().take();
    });

    let state = controller.state.read();
    let items = controller.items.read();
    let hidden = !state.reveal_started();
    let grid_class = if state.is_revealed() {
        "photos revealed"
    } else {
        "photos"
    };
    let current = if state.is_lightbox_open() {
        items.get(state.current_index()).cloned()
    } else {
        None
    };

    rsx! {
        section { class: "gallery",
            h2 { class: "gallery-title",
                CameraIcon { class: "icon-lg" }
                "Our Beautiful Memories"
            }
            div { class: grid_class,
                for (i , item) in items.iter().enumerate() {
                    GalleryThumbnail {
                        key: "{i}",
                        item: item.clone(),
                        index: i,
                        hidden,
                        on_open: move |index| controller.open(index),
                        on_mounted: move |element| {
                            if let Some(slot) = thumbs.write().get_mut(i) {
                                *slot = Some(element);
                            }
                        },
                    }
                }
            }

            {
                current
                    .map(|item| {
                        rsx! {
                            LightboxView {
                                item,
                                index: state.current_index(),
                                total: state.item_count(),
                                presentation: state.presentation(),
                                entering: state.has_pending_entrance(),
                                on_close: move |_| controller.close(),
                                on_prev: move |_| controller.navigate(NavDirection::Prev),
                                on_next: move |_| controller.navigate(NavDirection::Next),
                                on_media_mounted: move |element| controller.on_media_mounted(element),
                            }
                        }
                    })
            }
        }
    }
}

/// Signals behind one gallery instance plus the lightbox operations on them
#[derive(Clone, Copy)]
struct LightboxController {
    state: Signal<GalleryState>,
    items: Signal<Vec<MediaItem>>,
    /// Currently mounted lightbox media element
    media: Signal<Option<MediaHandle>>,
    /// Running lightbox tween, cancelled when a newer one replaces it
    tween: Signal<Option<TweenHandle>>,
    animator: Signal<AnimatorHandle>,
    motion: Signal<MotionConfig>,
}

impl LightboxController {
    fn open(mut self, index: usize) {
        self.cancel_tween();
        self.state.write().open(index);
    }

    fn close(mut self) {
        self.cancel_tween();
        self.state.write().close();
        self.media.set(None);
    }

    fn navigate(mut self, direction: NavDirection) {
        let handle = self.media.peek().clone();
        if let Some(handle) = &handle {
            if let Err(e) = handle.pause_if_playing() {
                warn!("Failed to pause media before navigating: {}", e);
            }
        }

        let step = self.state.write().navigate(direction, handle.is_some());
        let (NavStep::Exit(transition), Some(handle)) = (step, handle) else {
            return;
        };

        self.cancel_tween();
        let motion = self.motion.peek().clone();
        let target = motion.nav_exit_target(direction);
        let tween = self.run_tween(
            |animator, done| animator.animate_to(handle.element(), &target, &motion.nav_exit, done),
            move || self.on_exit_complete(transition.token),
        );
        self.tween.set(tween);
    }

    fn on_exit_complete(mut self, token: TransitionToken) {
        if !self.state.write().exit_complete(token) {
            return;
        }
        self.tween.set(None);
        // The swapped item mounts under a new key and claims its entrance
        self.media.set(None);
    }

    fn on_media_mounted(mut self, element: web_sys_x::Element) {
        let handle = MediaHandle::new(element);
        self.media.set(Some(handle.clone()));

        let entrance = self.state.write().take_pending_entrance();
        let motion = self.motion.peek().clone();
        let targets = [handle.element().clone()];

        let tween = match entrance {
            Some(Entrance::Open) => self.run_tween(
                |animator, done| {
                    animator.animate_from_to(
                        &targets,
                        &motion.lightbox_from,
                        &motion.lightbox_to,
                        &motion.lightbox,
                        done,
                    )
                },
                || {},
            ),
            Some(Entrance::Navigate(transition)) => {
                let from = motion.nav_entrance_from(transition.direction);
                let to = motion.nav_entrance_to();
                self.run_tween(
                    |animator, done| {
                        animator.animate_from_to(&targets, &from, &to, &motion.nav_entrance, done)
                    },
                    move || self.on_entrance_complete(transition.token),
                )
            }
            None => return,
        };
        self.tween.set(tween);
    }

    fn on_entrance_complete(mut self, token: TransitionToken) {
        let Some(index) = self.state.write().entrance_complete(token) else {
            return;
        };
        self.tween.set(None);

        let is_video = self.items.peek().get(index).is_some_and(MediaItem::is_video);
        if !is_video {
            return;
        }
        let Some(handle) = self.media.peek().clone() else {
            return;
        };
        spawn(async move {
            // Browsers may block autoplay until the user interacts with the page
            if let Err(e) = handle.play().await {
                info!("Autoplay prevented: {}", e);
            }
        });
    }

    fn cancel_tween(mut self) {
        if let Some(tween) = self.tween.write().take() {
            tween.cancel();
        }
    }

    /// Start a tween through the animator. If the animator fails, the tween is
    /// skipped and `on_complete` runs right away so the state machine moves on.
    fn run_tween(
        self,
        start: impl FnOnce(&dyn Animator, Option<OnComplete>) -> Result<TweenHandle, AnimationError>,
        on_complete: impl FnOnce() + 'static,
    ) -> Option<TweenHandle> {
        let slot: Rc<RefCell<Option<OnComplete>>> =
            Rc::new(RefCell::new(Some(Box::new(on_complete))));
        let from_animator = slot.clone();
        let done: OnComplete = Box::new(move || {
            let on_complete = from_animator.borrow_mut().take();
            if let Some(on_complete) = on_complete {
                on_complete();
            }
        });

        let animator = self.animator.peek().clone();
        match start(&*animator, Some(done)) {
            Ok(tween) => Some(tween),
            Err(e) => {
                warn!("Skipping animation: {}", e);
                let on_complete = slot.borrow_mut().take();
                if let Some(on_complete) = on_complete {
                    on_complete();
                }
                None
            }
        }
    }
}
