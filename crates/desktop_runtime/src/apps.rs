//! Static registry mapping each [`AppId`] to its dock entry and mounted panel.

use desktop_app_contract::{AppId, AppModule};

#[derive(Debug, Clone, Copy)]
pub struct AppDescriptor {
    pub app_id: AppId,
    /// Dock tooltip.
    pub dock_label: &'static str,
    /// Dock glyph.
    pub glyph: &'static str,
    pub module: AppModule,
}

const APP_REGISTRY: [AppDescriptor; 7] = [
    AppDescriptor {
        app_id: AppId::UserManager,
        dock_label: "Users",
        glyph: "👥",
        module: AppModule::new(desktop_app_user_manager::mount),
    },
    AppDescriptor {
        app_id: AppId::Terminal,
        dock_label: "Terminal",
        glyph: "⌨️",
        module: AppModule::new(desktop_app_terminal::mount),
    },
    AppDescriptor {
        app_id: AppId::HistoryViewer,
        dock_label: "History",
        glyph: "🕘",
        module: AppModule::new(desktop_app_history_viewer::mount),
    },
    AppDescriptor {
        app_id: AppId::ReportGenerator,
        dock_label: "Reports",
        glyph: "📊",
        module: AppModule::new(desktop_app_report_generator::mount),
    },
    AppDescriptor {
        app_id: AppId::ExportData,
        dock_label: "Export",
        glyph: "📤",
        module: AppModule::new(desktop_app_export_data::mount),
    },
    AppDescriptor {
        app_id: AppId::AdvancedSettings,
        dock_label: "Settings",
        glyph: "⚙️",
        module: AppModule::new(desktop_app_settings::mount),
    },
    AppDescriptor {
        app_id: AppId::WallpaperSettings,
        dock_label: "Wallpaper",
        glyph: "🖼️",
        module: AppModule::new(desktop_app_wallpaper_settings::mount),
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(app_id: AppId) -> &'static AppDescriptor {
    app_registry()
        .iter()
        .find(|entry| entry.app_id == app_id)
        .expect("app descriptor exists")
}
