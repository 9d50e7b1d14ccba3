//! Image gallery with thumbnail strip and prev/next controls.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/item_detail/item_detail.module.css");

/// Previous image index, wrapping to the last image from the first.
fn prev_index(current: usize, count: usize) -> usize {
    if current == 0 { count - 1 } else { current - 1 }
}

/// Next image index, wrapping to the first image from the last.
fn next_index(current: usize, count: usize) -> usize {
    (current + 1) % count
}

#[component]
pub fn Gallery(images: Vec<String>, title: String) -> impl IntoView {
    let count = images.len();
    let (selected, set_selected) = signal(0usize);

    let images_main = StoredValue::new(images.clone());

    let on_prev = move |_: leptos::ev::MouseEvent| {
        set_selected.update(|i| *i = prev_index(*i, count));
    };
    let on_next = move |_: leptos::ev::MouseEvent| {
        set_selected.update(|i| *i = next_index(*i, count));
    };

    if count == 0 {
        return view! {
            <div class=css::gallery>
                <div class=css::galleryMain>
                    <span class=css::galleryPlaceholder><Icon icon=ic::IMAGE /></span>
                </div>
            </div>
        }
        .into_any();
    }

    view! {
        <div class=css::gallery>
            <div class=css::galleryMain>
                <img
                    src=move || {
                        images_main.with_value(|imgs| {
                            imgs.get(selected.get()).cloned().unwrap_or_default()
                        })
                    }
                    alt=title
                />
                <Show when=move || (count > 1)>
                    <button class=format!("{} {}", css::galleryNav, css::galleryNavPrev)
                        on:click=on_prev title="Previous image">
                        <Icon icon=ic::CHEVRON_LEFT />
                    </button>
                    <button class=format!("{} {}", css::galleryNav, css::galleryNavNext)
                        on:click=on_next title="Next image">
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </button>
                </Show>
            </div>

            <Show when=move || (count > 1)>
                <div class=css::thumbStrip>
                    {images
                        .iter()
                        .enumerate()
                        .map(|(index, url)| {
                            let url = url.clone();
                            view! {
                                <button
                                    class=move || {
                                        if selected.get() == index {
                                            format!("{} {}", css::thumb, css::thumbActive)
                                        } else {
                                            css::thumb.to_string()
                                        }
                                    }
                                    on:click=move |_| set_selected.set(index)
                                >
                                    <img src=url alt="" loading="lazy" />
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps_both_ways() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(1, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
    }

    #[test]
    fn test_single_image_stays_put() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }
}
