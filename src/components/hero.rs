//! Hero section: typing subtitle and rotating profile picture.

use dioxus::prelude::*;
use folio_core::rotation::{FADE_DURATION, ROTATION_INTERVAL};
use folio_core::{ImageRotation, TypingEffect};

/// Fade the profile picture out, swap in the next image, fade back in.
async fn fade_to_next(mut rotation: Signal<ImageRotation>, mut src: Signal<String>) {
    rotation.write().begin_fade();
    tokio::time::sleep(FADE_DURATION).await;
    let next = rotation.write().finish_fade().map(str::to_string);
    if let Some(next) = next {
        src.set(next);
    }
}

#[component]
pub fn Hero(owner: String, words: Vec<String>, images: Vec<String>) -> Element {
    let mut subtitle = use_signal(String::new);
    let src = use_signal(String::new);
    let mut rotation = use_signal(|| ImageRotation::new(images.clone()));
    let mut rotation_task: Signal<Option<Task>> = use_signal(|| None);

    // Typing effect runs for the lifetime of the page
    use_future(move || {
        let words = words.clone();
        async move {
            let mut effect = TypingEffect::new(words);
            loop {
                let frame = effect.tick();
                subtitle.set(frame.text);
                tokio::time::sleep(frame.delay).await;
            }
        }
    });

    // (Re)start the rotation interval from zero
    let mut start_rotation = move || {
        if let Some(task) = rotation_task.write().take() {
            task.cancel();
        }
        if !rotation.peek().is_enabled() {
            return;
        }
        let task = spawn(async move {
            loop {
                tokio::time::sleep(ROTATION_INTERVAL).await;
                fade_to_next(rotation, src).await;
            }
        });
        rotation_task.set(Some(task));
    };

    // A fade cut short by the cancel must not leave the picture hidden
    let mut stop_rotation = move || {
        if let Some(task) = rotation_task.write().take() {
            task.cancel();
        }
        rotation.write().pause();
    };

    use_hook(move || {
        spawn(fade_to_next(rotation, src));
        start_rotation();
    });

    let faded = rotation.read().is_faded();

    rsx! {
        div { class: "hero-text",
            p { "Hello, I'm" }
            h1 { class: "hero-title", "{owner}" }
            p { id: "typing-subtitle", class: "typing-subtitle", "{subtitle}" }
        }

        div {
            class: "profile-pic-frame-wrapper",
            onmouseenter: move |_| stop_rotation(),
            onmouseleave: move |_| start_rotation(),
            if !src().is_empty() {
                img {
                    class: "profile-pic",
                    src: "{src}",
                    alt: "Profile picture",
                    style: if faded { "opacity: 0" } else { "opacity: 1" },
                }
            }
        }
    }
}
