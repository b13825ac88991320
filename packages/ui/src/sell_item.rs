//! The "share your story" listing form.
//!
//! Every field writes straight into the marketplace draft; the story counter
//! and drop-zone highlight are read back from it on each render.

use api::{photo_noun, Category, Condition, PhotoRef};
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

use crate::icons::{FaCamera, FaDollarSign, FaHeart, FaLocationDot, FaStar, FaTag};
use crate::scroll::SELL_ITEM;
use crate::{use_market, Icon};

fn photo_refs(files: Vec<FileData>) -> Vec<PhotoRef> {
    files
        .into_iter()
        .map(|file| PhotoRef::new(file.name(), file.size()))
        .collect()
}

#[component]
pub fn SellItemSection() -> Element {
    let mut market = use_market();

    let (draft, drop_active, below_minimum, min_chars, max_photos) = {
        let market = market.read();
        let listing = market.listing();
        (
            listing.draft().clone(),
            listing.drop_zone().is_active(),
            listing.story_below_minimum(),
            listing.rules().min_story_chars,
            listing.rules().max_photos,
        )
    };
    let story_len = draft.story_len();
    let photo_count = draft.photos.len();
    let category_value = draft.category.map(|c| c.label()).unwrap_or_default();
    let condition_value = draft.condition.map(|c| c.label()).unwrap_or_default();

    let drop_class = if drop_active { "drop-zone drop-zone--active" } else { "drop-zone" };
    let counter_class = if below_minimum { "counter counter--short" } else { "counter counter--ok" };

    rsx! {
        section {
            id: SELL_ITEM,
            class: "section",
            div {
                class: "section-inner section-narrow",
                div {
                    class: "section-heading",
                    span {
                        class: "badge badge-secondary",
                        Icon { icon: FaHeart, width: 14, height: 14 }
                        "Share Your Story"
                    }
                    h2 { "Give Your Treasures a New Chapter" }
                    p {
                        class: "muted",
                        "Every item you no longer need could be someone's perfect find. Share the story behind your treasure and help it continue its journey."
                    }
                }

                div {
                    class: "card sell-card",
                    div {
                        class: "sell-card-header",
                        h3 { "Tell Your Item's Story" }
                        p { class: "muted", "Help buyers connect with your item by sharing its history and meaning" }
                    }
                    form {
                        class: "sell-form",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            let _ = market.write().submit_listing();
                        },

                        div {
                            class: "field",
                            label {
                                class: "field-label",
                                Icon { icon: FaCamera, width: 18, height: 18 }
                                "Item Photos *"
                            }
                            div {
                                class: drop_class,
                                ondragenter: move |evt: DragEvent| {
                                    evt.prevent_default();
                                    evt.stop_propagation();
                                    market.write().drag_enter();
                                },
                                ondragover: move |evt: DragEvent| {
                                    evt.prevent_default();
                                    evt.stop_propagation();
                                    market.write().drag_over();
                                },
                                ondragleave: move |evt: DragEvent| {
                                    evt.prevent_default();
                                    evt.stop_propagation();
                                    market.write().drag_leave();
                                },
                                ondrop: move |evt: DragEvent| {
                                    evt.prevent_default();
                                    evt.stop_propagation();
                                    market.write().drop_photos(photo_refs(evt.files()));
                                },
                                Icon { icon: FaCamera, width: 48, height: 48, class: "muted" }
                                p { class: "drop-zone-title", "Drop photos here or click to browse" }
                                p { class: "muted small", "Upload up to {max_photos} photos (JPG, PNG, WebP)" }
                                input {
                                    r#type: "file",
                                    class: "input file-input",
                                    multiple: true,
                                    accept: "image/*",
                                    onchange: move |evt: FormEvent| {
                                        market.write().attach_photos(photo_refs(evt.files()));
                                    },
                                }
                                if photo_count > 0 {
                                    p { class: "photo-count", "{photo_count} {photo_noun(photo_count)} selected" }
                                }
                            }
                        }

                        div {
                            class: "field",
                            label { class: "field-label", r#for: "title", "Item Title *" }
                            input {
                                id: "title",
                                class: "input input-lg",
                                placeholder: "e.g., Grandmother's Hand-Knitted Wool Sweater",
                                required: true,
                                value: "{draft.title}",
                                oninput: move |evt: FormEvent| {
                                    market.write().listing_mut().draft_mut().title = evt.value();
                                },
                            }
                        }

                        div {
                            class: "field-row",
                            div {
                                class: "field",
                                label {
                                    class: "field-label",
                                    Icon { icon: FaTag, width: 14, height: 14 }
                                    "Category *"
                                }
                                select {
                                    class: "input",
                                    value: category_value,
                                    onchange: move |evt: FormEvent| {
                                        market.write().listing_mut().draft_mut().category =
                                            Category::from_label(&evt.value());
                                    },
                                    option { value: "", disabled: true, selected: draft.category.is_none(), "Choose a category" }
                                    for category in Category::ALL {
                                        option {
                                            key: "{category.label()}",
                                            value: category.label(),
                                            selected: draft.category == Some(category),
                                            "{category.label()}"
                                        }
                                    }
                                }
                            }
                            div {
                                class: "field",
                                label {
                                    class: "field-label",
                                    Icon { icon: FaStar, width: 14, height: 14 }
                                    "Condition *"
                                }
                                select {
                                    class: "input",
                                    value: condition_value,
                                    onchange: move |evt: FormEvent| {
                                        market.write().listing_mut().draft_mut().condition =
                                            Condition::from_label(&evt.value());
                                    },
                                    option { value: "", disabled: true, selected: draft.condition.is_none(), "Select condition" }
                                    for condition in Condition::ALL {
                                        option {
                                            key: "{condition.label()}",
                                            value: condition.label(),
                                            selected: draft.condition == Some(condition),
                                            "{condition.label()}"
                                        }
                                    }
                                }
                            }
                        }

                        div {
                            class: "field-row",
                            div {
                                class: "field",
                                label {
                                    class: "field-label",
                                    r#for: "price",
                                    Icon { icon: FaDollarSign, width: 14, height: 14 }
                                    "Price"
                                }
                                input {
                                    id: "price",
                                    class: "input",
                                    r#type: "number",
                                    placeholder: "25.00",
                                    value: "{draft.price}",
                                    oninput: move |evt: FormEvent| {
                                        market.write().listing_mut().draft_mut().price = evt.value();
                                    },
                                }
                            }
                            div {
                                class: "field",
                                label {
                                    class: "field-label",
                                    r#for: "location",
                                    Icon { icon: FaLocationDot, width: 14, height: 14 }
                                    "Location"
                                }
                                input {
                                    id: "location",
                                    class: "input",
                                    placeholder: "e.g., Brooklyn, NY",
                                    value: "{draft.location}",
                                    oninput: move |evt: FormEvent| {
                                        market.write().listing_mut().draft_mut().location = evt.value();
                                    },
                                }
                            }
                        }

                        div {
                            class: "field",
                            label {
                                class: "field-label",
                                r#for: "story",
                                Icon { icon: FaHeart, width: 14, height: 14, class: "accent" }
                                "Your Item's Story * (Minimum {min_chars} characters)"
                            }
                            textarea {
                                id: "story",
                                class: "input textarea textarea-tall",
                                placeholder: "Share the memories, history, and emotional connection you have with this item. Who gave it to you? What moments did you share together? Why is it special? Help the next owner understand what makes this item truly meaningful...",
                                required: true,
                                value: "{draft.story}",
                                oninput: move |evt: FormEvent| {
                                    market.write().listing_mut().draft_mut().story = evt.value();
                                },
                            }
                            div {
                                class: "field-footer",
                                p { class: "muted small", "Stories help buyers connect emotionally with your item" }
                                span { class: counter_class, "{story_len}/{min_chars} minimum" }
                            }
                        }

                        div {
                            class: "field",
                            label { class: "field-label", r#for: "why-letting-go", "Why Are You Letting It Go?" }
                            textarea {
                                id: "why-letting-go",
                                class: "input textarea",
                                placeholder: "Moving to a new city, decluttering, kids have outgrown it, found a new hobby...",
                                value: "{draft.why_letting_go}",
                                oninput: move |evt: FormEvent| {
                                    market.write().listing_mut().draft_mut().why_letting_go = evt.value();
                                },
                            }
                        }

                        div {
                            class: "field",
                            label { class: "field-label", r#for: "description", "Additional Details" }
                            textarea {
                                id: "description",
                                class: "input textarea",
                                placeholder: "Size, materials, care instructions, any flaws or wear, included accessories...",
                                value: "{draft.description}",
                                oninput: move |evt: FormEvent| {
                                    market.write().listing_mut().draft_mut().description = evt.value();
                                },
                            }
                        }

                        div {
                            class: "sell-submit",
                            button {
                                class: "btn btn-primary btn-lg btn-block",
                                r#type: "submit",
                                Icon { icon: FaHeart, width: 20, height: 20 }
                                "Share Your Story & List Item"
                            }
                            p { class: "muted small center", "By listing, you agree to our community guidelines of honest storytelling" }
                        }
                    }
                }
            }
        }
    }
}
