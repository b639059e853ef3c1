//! The view-switching button row.

use bevy::prelude::*;

use constants::assets::VIEW_TARGETS;
use constants::ui::{
    BUTTON_GAP, BUTTON_HEIGHT, BUTTON_ROW_BOTTOM, BUTTON_WIDTH, HOVERED_BUTTON, LABEL_COLOR,
    LABEL_FONT_SIZE, NORMAL_BUTTON, PRESSED_BUTTON,
};

use crate::viewer::switcher::ViewSwitcher;

/// One button per view target, carrying the target's position in the
/// switcher's ordered list.
#[derive(Component, Debug)]
pub struct ViewButton {
    pub index: usize,
}

/// Spawns the centred button row along the bottom edge of the window.
pub fn spawn_view_buttons(world: &mut World, font: Handle<Font>) {
    world
        .spawn(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(BUTTON_ROW_BOTTOM),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            column_gap: Val::Px(BUTTON_GAP),
            ..default()
        })
        .with_children(|parent| {
            for (index, target) in VIEW_TARGETS.iter().enumerate() {
                parent
                    .spawn((
                        Button,
                        Node {
                            width: Val::Px(BUTTON_WIDTH),
                            height: Val::Px(BUTTON_HEIGHT),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        BackgroundColor(NORMAL_BUTTON),
                        ViewButton { index },
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new(target.label),
                            TextFont {
                                font: font.clone(),
                                font_size: LABEL_FONT_SIZE,
                                ..default()
                            },
                            TextColor(LABEL_COLOR),
                        ));
                    });
            }
        });
}

/// Button feedback and view selection. A press asks the switcher for the
/// transition and flips the two node flags; re-pressing the active view
/// yields no transition and changes nothing.
pub fn view_button_system(
    mut interactions: Query<
        (&Interaction, &ViewButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    switcher: Option<ResMut<ViewSwitcher>>,
    mut visibilities: Query<&mut Visibility>,
) {
    let Some(mut switcher) = switcher else {
        return;
    };
    for (interaction, button, mut background) in &mut interactions {
        match *interaction {
            Interaction::Pressed => {
                *background = BackgroundColor(PRESSED_BUTTON);
                match switcher.select(button.index) {
                    Ok(Some(transition)) => {
                        if let Some(previous) = transition.deactivate {
                            if let Ok(mut visibility) = visibilities.get_mut(previous) {
                                *visibility = Visibility::Hidden;
                            }
                        }
                        if let Ok(mut visibility) = visibilities.get_mut(transition.activate) {
                            *visibility = Visibility::Inherited;
                        }
                        info!("switched to {}", VIEW_TARGETS[button.index].name);
                    }
                    Ok(None) => {}
                    Err(err) => error!("{err}"),
                }
            }
            Interaction::Hovered => *background = BackgroundColor(HOVERED_BUTTON),
            Interaction::None => *background = BackgroundColor(NORMAL_BUTTON),
        }
    }
}
