use tauri::{
    menu::{IsMenuItem, Menu, PredefinedMenuItem},
    Runtime, WebviewWindow,
};

use crate::shell_locale::ShellTexts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditRole {
    Copy,
    Paste,
    Cut,
    SelectAll,
}

impl EditRole {
    fn key(self) -> char {
        match self {
            EditRole::Copy => 'C',
            EditRole::Paste => 'V',
            EditRole::Cut => 'X',
            EditRole::SelectAll => 'A',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContextMenuEntry {
    Action {
        role: EditRole,
        label: String,
        shortcut_hint: String,
    },
    Separator,
}

pub(crate) fn shortcut_hint(role: EditRole, mac_shortcuts: bool) -> String {
    let modifier = if mac_shortcuts { "⌘" } else { "Ctrl" };
    format!("{modifier} + {}", role.key())
}

pub(crate) fn context_menu_entries(
    texts: ShellTexts,
    mac_shortcuts: bool,
) -> Vec<ContextMenuEntry> {
    let action = |role: EditRole, label: &str| ContextMenuEntry::Action {
        role,
        label: label.to_string(),
        shortcut_hint: shortcut_hint(role, mac_shortcuts),
    };

    vec![
        action(EditRole::Copy, texts.copy),
        action(EditRole::Paste, texts.paste),
        action(EditRole::Cut, texts.cut),
        ContextMenuEntry::Separator,
        action(EditRole::SelectAll, texts.select_all),
    ]
}

fn display_text(label: &str, shortcut_hint: &str) -> String {
    format!("{label}\t{shortcut_hint}")
}

/// Pops the edit menu over `window`. The actions themselves are the platform's predefined
/// edit items; the shortcut hint is display text only.
pub(crate) fn popup_context_menu<R: Runtime>(
    window: &WebviewWindow<R>,
    entries: &[ContextMenuEntry],
) -> Result<(), String> {
    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        let item = match entry {
            ContextMenuEntry::Action {
                role,
                label,
                shortcut_hint,
            } => {
                let text = display_text(label, shortcut_hint);
                let text = Some(text.as_str());
                match role {
                    EditRole::Copy => PredefinedMenuItem::copy(window, text),
                    EditRole::Paste => PredefinedMenuItem::paste(window, text),
                    EditRole::Cut => PredefinedMenuItem::cut(window, text),
                    EditRole::SelectAll => PredefinedMenuItem::select_all(window, text),
                }
            }
            ContextMenuEntry::Separator => PredefinedMenuItem::separator(window),
        }
        .map_err(|error| format!("Failed to create context menu item: {error}"))?;
        items.push(item);
    }

    let item_refs: Vec<&dyn IsMenuItem<R>> = items
        .iter()
        .map(|item| item as &dyn IsMenuItem<R>)
        .collect();
    let menu = Menu::with_items(window, &item_refs)
        .map_err(|error| format!("Failed to build context menu: {error}"))?;

    window
        .popup_menu(&menu)
        .map_err(|error| format!("Failed to show context menu: {error}"))
}
