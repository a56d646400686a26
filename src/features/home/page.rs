//! Home Page
//!
//! Profile form with username, email, password and a dynamic hobby list.

use ahash::AHashMap;
use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, Focusable, IntoElement, ParentElement,
    Render, SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::text_input::{text_input, TextInput, TextInputEvent};
use crate::constants::FORM_MAX_WIDTH;
use crate::domain::hobbies::HobbyId;
use crate::domain::validation::FieldPath;
use crate::features::home::controller::HomeController;
use crate::i18n::t;
use crate::theme::colors::FormColors;

/// Rendered state of one hobby row
struct HobbyRow {
    index: usize,
    input: Option<Entity<TextInput>>,
    error: Option<SharedString>,
    removable: bool,
}

/// Home page component
pub struct HomePage {
    entities: AppEntities,
    controller: HomeController,
    username_input: Entity<TextInput>,
    email_input: Entity<TextInput>,
    password_input: Entity<TextInput>,
    hobby_inputs: AHashMap<HobbyId, Entity<TextInput>>,
}

impl HomePage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = HomeController::new(entities.clone());
        let locale = entities.i18n.read(cx).locale;

        let username_input = text_input(
            "username-input",
            t(locale, "form-username-placeholder"),
            false,
            cx,
        );
        cx.subscribe(&username_input, |this, _input, event: &TextInputEvent, cx| {
            let TextInputEvent::Changed(value) = event;
            this.controller.set_username(value.clone(), cx);
        })
        .detach();

        let email_input =
            text_input("email-input", t(locale, "form-email-placeholder"), false, cx);
        cx.subscribe(&email_input, |this, _input, event: &TextInputEvent, cx| {
            let TextInputEvent::Changed(value) = event;
            this.controller.set_email(value.clone(), cx);
        })
        .detach();

        let password_input = text_input(
            "password-input",
            t(locale, "form-password-placeholder"),
            true,
            cx,
        );
        cx.subscribe(&password_input, |this, _input, event: &TextInputEvent, cx| {
            let TextInputEvent::Changed(value) = event;
            this.controller.set_password(value.clone(), cx);
        })
        .detach();

        // Observe form changes
        cx.observe(&entities.form, |this, _, cx| {
            this.sync_hobby_inputs(cx);
            cx.notify();
        })
        .detach();

        // Observe i18n changes
        cx.observe(&entities.i18n, |this, _, cx| {
            this.refresh_placeholders(cx);
            cx.notify();
        })
        .detach();

        let mut page = Self {
            entities,
            controller,
            username_input,
            email_input,
            password_input,
            hobby_inputs: AHashMap::new(),
        };
        page.sync_hobby_inputs(cx);
        tracing::debug!("HomePage created with locale {}", locale.display_name());
        page
    }

    /// Keep one input per hobby entry
    fn sync_hobby_inputs(&mut self, cx: &mut Context<Self>) {
        let ids: Vec<HobbyId> = self.entities.form.read(cx).form().hobbies.ids().to_vec();

        self.hobby_inputs.retain(|id, _| ids.contains(id));
        for id in ids {
            if !self.hobby_inputs.contains_key(&id) {
                let input = self.create_hobby_input(id, cx);
                self.hobby_inputs.insert(id, input);
            }
        }
    }

    fn create_hobby_input(&self, id: HobbyId, cx: &mut Context<Self>) -> Entity<TextInput> {
        let locale = self.entities.i18n.read(cx).locale;
        let name = self
            .entities
            .form
            .read(cx)
            .form()
            .hobbies
            .get_by_id(id)
            .map(|entry| entry.name().to_string())
            .unwrap_or_default();

        let input = text_input(
            SharedString::from(format!("hobby-input-{}", id)),
            t(locale, "form-hobby-placeholder"),
            false,
            cx,
        );
        input.update(cx, |input, _cx| input.set_value(name));

        cx.subscribe(&input, move |this, _input, event: &TextInputEvent, cx| {
            let TextInputEvent::Changed(value) = event;
            this.controller.set_hobby_name(id, value.clone(), cx);
        })
        .detach();

        input
    }

    fn refresh_placeholders(&mut self, cx: &mut Context<Self>) {
        let locale = self.entities.i18n.read(cx).locale;
        let fields = [
            (&self.username_input, "form-username-placeholder"),
            (&self.email_input, "form-email-placeholder"),
            (&self.password_input, "form-password-placeholder"),
        ];
        let hobbies = self
            .hobby_inputs
            .values()
            .map(|input| (input, "form-hobby-placeholder"));

        for (input, key) in fields.into_iter().chain(hobbies) {
            let placeholder = t(locale, key);
            input.update(cx, |input, cx| {
                input.set_placeholder(placeholder);
                cx.notify();
            });
        }
    }

    fn append_hobby(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(id) = self.controller.append_hobby(cx) else {
            return;
        };

        self.sync_hobby_inputs(cx);
        if let Some(input) = self.hobby_inputs.get(&id) {
            let handle = input.read(cx).focus_handle(cx);
            window.focus(&handle);
        }
        cx.notify();
    }

    fn remove_hobby(&mut self, index: usize, cx: &mut Context<Self>) {
        if let Some(id) = self.controller.remove_hobby(index, cx) {
            self.hobby_inputs.remove(&id);
        }
        cx.notify();
    }

    fn render_field(
        &self,
        label: SharedString,
        description: SharedString,
        input: Entity<TextInput>,
        error: Option<SharedString>,
    ) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(if error.is_some() {
                        FormColors::danger()
                    } else {
                        FormColors::text_primary()
                    })
                    .child(label),
            )
            .child(input)
            .child(
                div()
                    .text_xs()
                    .text_color(FormColors::text_secondary())
                    .child(description),
            )
            .when_some(error, |el, message| {
                el.child(
                    div()
                        .text_xs()
                        .text_color(FormColors::danger())
                        .child(message),
                )
            })
    }

    fn render_hobby_row(
        &self,
        row: HobbyRow,
        remove_label: SharedString,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let index = row.index;

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(div().flex_1().children(row.input))
                    .when(row.removable, |el| {
                        el.child(
                            Button::destructive(
                                SharedString::from(format!("remove-hobby-{}", index)),
                                remove_label,
                            )
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(
                                move |this, _event: &ClickEvent, _window, cx| {
                                    this.remove_hobby(index, cx);
                                },
                            )),
                        )
                    }),
            )
            .when_some(row.error, |el, message| {
                el.child(
                    div()
                        .text_xs()
                        .text_color(FormColors::danger())
                        .child(message),
                )
            })
    }
}

impl Render for HomePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let state = self.entities.form.read(cx);

        let field_error =
            |path: FieldPath| state.visible_error(path).map(|e| t(locale, e.message_key()));
        let username_error = field_error(FieldPath::Username);
        let email_error = field_error(FieldPath::Email);
        let password_error = field_error(FieldPath::Password);

        let hobby_rows: Vec<HobbyRow> = state
            .form()
            .hobbies
            .ids()
            .iter()
            .enumerate()
            .map(|(index, id)| HobbyRow {
                index,
                input: self.hobby_inputs.get(id).cloned(),
                error: field_error(FieldPath::HobbyName(index)),
                removable: state.can_remove_hobby(index),
            })
            .collect();

        let can_append = state.can_append_hobby();
        let can_submit = state.can_submit();
        let submit_label = t(locale, state.submit_label_key());
        let outcome = state
            .last_outcome()
            .map(|outcome| (outcome.is_success(), t(locale, outcome.message_key())));

        let remove_label = t(locale, "action-remove");
        let hobby_elements: Vec<_> = hobby_rows
            .into_iter()
            .map(|row| self.render_hobby_row(row, remove_label.clone(), cx))
            .collect();

        div()
            .id("home-page")
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .overflow_y_scroll()
            .p_4()
            .child(
                div()
                    .w_full()
                    .max_w(px(FORM_MAX_WIDTH))
                    .p_4()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .bg(FormColors::content_bg())
                    .border_1()
                    .border_color(FormColors::border())
                    .rounded_md()
                    .child(self.render_field(
                        t(locale, "form-username"),
                        t(locale, "form-username-description"),
                        self.username_input.clone(),
                        username_error,
                    ))
                    .child(self.render_field(
                        t(locale, "form-email"),
                        t(locale, "form-email-description"),
                        self.email_input.clone(),
                        email_error,
                    ))
                    .child(self.render_field(
                        t(locale, "form-password"),
                        t(locale, "form-password-description"),
                        self.password_input.clone(),
                        password_error,
                    ))
                    // Hobbies
                    .child(
                        div()
                            .w_full()
                            .flex()
                            .flex_col()
                            .gap_2()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .text_color(FormColors::text_primary())
                                    .child(t(locale, "form-hobbies")),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(FormColors::text_secondary())
                                    .child(t(locale, "form-hobbies-description")),
                            )
                            .children(hobby_elements)
                            .child(
                                div().child(
                                    Button::outline("add-hobby-btn", t(locale, "action-add-hobby"))
                                        .size(ButtonSize::Small)
                                        .disabled(!can_append)
                                        .on_click(cx.listener(
                                            |this, _event: &ClickEvent, window, cx| {
                                                this.append_hobby(window, cx);
                                            },
                                        )),
                                ),
                            ),
                    )
                    .child(
                        Button::primary("submit-btn", submit_label)
                            .full_width()
                            .disabled(!can_submit)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.submit(cx);
                            })),
                    )
                    .when_some(outcome, |el, (success, message)| {
                        el.child(
                            div()
                                .text_sm()
                                .text_color(if success {
                                    FormColors::success()
                                } else {
                                    FormColors::danger()
                                })
                                .child(message),
                        )
                    }),
            )
    }
}
