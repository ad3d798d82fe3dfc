//! # Header View
//!
//! Pure mapping from (theme, device class, local state, document flags) to a
//! description of what the header shows. No rendering crate is involved; the
//! terminal adapter draws whatever this returns.
//!
//! Button order is fixed:
//!
//! ```text
//! [Edit] | [Save][Cancel]   [Link]?   [Pin]   [Settings]   [Publish|Unpublish]?   [Delete]
//! ```

use crate::core::document::PublishControl;
use crate::core::header::{EditorHeader, HeaderAction, HeaderProps, UiEvent};
use crate::core::layout::{self, DeviceClass, LayoutPolicy};
use crate::core::theme::{self, Rgb, Theme, ThemeStyles};

/// Context the header reads but does not own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderContext {
    pub theme: Theme,
    pub device: DeviceClass,
}

/// Button captions. Supplied from outside; nothing here translates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub edit: String,
    pub save: String,
    pub cancel: String,
    pub publish: String,
    /// Publish caption on mobile.
    pub publish_short: String,
    pub unpublish: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            edit: "Edit title".to_string(),
            save: "Save".to_string(),
            cancel: "Cancel".to_string(),
            publish: "Publish".to_string(),
            publish_short: "Publish".to_string(),
            unpublish: "Unpublish".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    EditTitle,
    SaveTitle,
    CancelEdit,
    ExternalLink,
    Pin,
    Settings,
    Publish,
    Unpublish,
    Delete,
}

impl Control {
    /// The action a press on this control triggers.
    pub fn action(self, event: UiEvent) -> HeaderAction {
        match self {
            Control::EditTitle => HeaderAction::StartEdit,
            Control::SaveTitle => HeaderAction::Save,
            Control::CancelEdit => HeaderAction::Cancel,
            Control::ExternalLink => HeaderAction::OpenLink(event),
            Control::Pin => HeaderAction::TogglePin,
            Control::Settings => HeaderAction::OpenSettings(event),
            Control::Publish => HeaderAction::Publish,
            Control::Unpublish => HeaderAction::Unpublish,
            Control::Delete => HeaderAction::RequestDelete,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Edit,
    Save,
    Link,
    /// Light link glyph, drawn on dark backgrounds.
    LinkLight,
    Pin,
    PinFill,
    Settings,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub color: Rgb,
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub control: Control,
    pub label: String,
    pub icon: Option<Icon>,
    pub variant: ButtonVariant,
    pub fg: Rgb,
    pub bg: Rgb,
    pub border: Option<Border>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleView {
    pub text: String,
    pub editing: bool,
    /// Byte offset of the cursor while editing.
    pub cursor: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmView {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub styles: ThemeStyles,
    pub layout: LayoutPolicy,
    pub title: TitleView,
    pub buttons: Vec<ButtonView>,
    pub confirm: Option<ConfirmView>,
}

impl HeaderView {
    pub fn has(&self, control: Control) -> bool {
        self.buttons.iter().any(|b| b.control == control)
    }

    pub fn button(&self, control: Control) -> Option<&ButtonView> {
        self.buttons.iter().find(|b| b.control == control)
    }
}

pub fn render(
    ctx: &HeaderContext,
    header: &EditorHeader,
    props: &HeaderProps,
    labels: &Labels,
) -> HeaderView {
    let styles = theme::styles(ctx.theme);
    let layout = layout::policy(ctx.device);
    let compact = layout.compact_labels;

    let plain = |control: Control, label: &str, icon: Option<Icon>| ButtonView {
        control,
        label: label.to_string(),
        icon,
        variant: ButtonVariant::Default,
        fg: styles.button_fg,
        bg: styles.button_background,
        border: None,
    };
    let edit_border = Some(Border {
        color: styles.button_border,
        dashed: false,
    });

    let mut buttons = Vec::new();

    if header.is_editing() {
        buttons.push(ButtonView {
            variant: ButtonVariant::Primary,
            border: edit_border,
            ..plain(
                Control::SaveTitle,
                if compact { "" } else { labels.save.as_str() },
                Some(Icon::Save),
            )
        });
        buttons.push(ButtonView {
            border: edit_border,
            ..plain(Control::CancelEdit, &labels.cancel, None)
        });
    } else {
        buttons.push(plain(
            Control::EditTitle,
            if compact { "" } else { labels.edit.as_str() },
            Some(Icon::Edit),
        ));
    }

    let kind = props.kind();
    if kind.shows_external_link() {
        let icon = match ctx.theme {
            Theme::Dark => Icon::LinkLight,
            Theme::Light => Icon::Link,
        };
        buttons.push(plain(Control::ExternalLink, "", Some(icon)));
    }

    let pin_icon = if header.is_pinned() {
        Icon::PinFill
    } else {
        Icon::Pin
    };
    buttons.push(plain(Control::Pin, "", Some(pin_icon)));
    buttons.push(plain(Control::Settings, "", Some(Icon::Settings)));

    match kind.publish_control() {
        Some(PublishControl::Publish) => buttons.push(ButtonView {
            variant: ButtonVariant::Primary,
            border: Some(Border {
                color: styles.publish_border,
                dashed: true,
            }),
            ..plain(
                Control::Publish,
                if compact {
                    labels.publish_short.as_str()
                } else {
                    labels.publish.as_str()
                },
                None,
            )
        }),
        Some(PublishControl::Unpublish) => {
            buttons.push(plain(Control::Unpublish, &labels.unpublish, None))
        }
        None => {}
    }

    buttons.push(plain(Control::Delete, "", Some(Icon::Delete)));

    let title = if header.is_editing() {
        TitleView {
            text: header.title.buffer().to_string(),
            editing: true,
            cursor: Some(header.title.cursor()),
        }
    } else {
        TitleView {
            text: props.init_title.clone(),
            editing: false,
            cursor: None,
        }
    };

    let confirm = header.is_confirming_delete().then(|| ConfirmView {
        title: props.pop_title.clone(),
        description: props.pop_des.clone(),
    });

    HeaderView {
        styles,
        layout,
        title,
        buttons,
        confirm,
    }
}
