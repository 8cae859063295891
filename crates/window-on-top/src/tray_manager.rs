//! System tray icon with an Exit menu.
//!
//! The tooltip names the bound shortcut. The icon is drawn at startup, so
//! no image files ship with the binary.

use crate::{AppError, AppResult, app::TrayShell};

use std::panic::Location;

use error_location::ErrorLocation;
use image::{Rgba, RgbaImage};
use tracing::{info, instrument};
use tray_icon::menu::{Menu, MenuId, MenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const ICON_SIZE: u32 = 32;
const PIN_HEAD: Rgba<u8> = Rgba([220, 53, 69, 255]);
const PIN_NEEDLE: Rgba<u8> = Rgba([90, 90, 90, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    exit_item_id: MenuId,
}

impl TrayManager {
    /// Create the tray icon, advertising `shortcut` in the tooltip.
    #[track_caller]
    #[instrument]
    pub fn new(shortcut: &str) -> AppResult<Self> {
        let menu = Menu::new();

        let exit_item = MenuItem::new("Exit", true, None);
        let exit_id = exit_item.id().clone();

        menu.append(&exit_item).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add exit menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(format!("Window On Top ({})", shortcut))
            .with_menu(Box::new(menu))
            .with_icon(Self::pin_icon()?)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            exit_item_id: exit_id,
        })
    }

    /// Draw a push-pin: round head on top, needle below.
    #[track_caller]
    fn pin_icon() -> AppResult<Icon> {
        let (cx, cy, radius) = (16.0_f32, 11.0_f32, 9.0_f32);

        let img = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
            let (dx, dy) = (x as f32 + 0.5 - cx, y as f32 + 0.5 - cy);
            if dx * dx + dy * dy <= radius * radius {
                PIN_HEAD
            } else if (15..=16).contains(&x) && (20..=30).contains(&y) {
                PIN_NEEDLE
            } else {
                TRANSPARENT
            }
        });

        let (width, height) = (img.width(), img.height());

        Icon::from_rgba(img.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl TrayShell for TrayManager {
    fn is_exit_item(&self, menu_id: &str) -> bool {
        self.exit_item_id.0 == menu_id
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn hide(&mut self) -> AppResult<()> {
        self.tray_icon
            .set_visible(false)
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to hide tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
