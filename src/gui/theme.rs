use eframe::egui::{
    self,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    RichText,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::clinic()
    }
}

impl Theme {
    pub fn clinic() -> Self {
        Theme { dark: Palette::clinic_night(), light: Palette::clinic_day() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).accent).strong()
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).accent
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).green
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).muted
    }

    pub fn card(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).surface
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    surface: Color32,
    raised: Color32,
    foreground: Color32,
    muted: Color32,
    selection: Color32,
    accent: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
}

impl Palette {
    fn clinic_night() -> Self {
        Self {
            background: Color32::from_rgb(18, 24, 31),
            surface: Color32::from_rgb(26, 34, 44),
            raised: Color32::from_rgb(38, 49, 62),
            foreground: Color32::from_rgb(222, 230, 236),
            muted: Color32::from_rgb(130, 146, 160),
            selection: Color32::from_rgb(44, 82, 104),
            accent: Color32::from_rgb(86, 196, 214),
            red: Color32::from_rgb(240, 110, 110),
            orange: Color32::from_rgb(240, 170, 90),
            green: Color32::from_rgb(96, 210, 140),
        }
    }

    fn clinic_day() -> Self {
        Self {
            background: Color32::from_rgb(243, 245, 247),
            surface: Color32::from_rgb(255, 255, 255),
            raised: Color32::from_rgb(228, 234, 239),
            foreground: Color32::from_rgb(30, 38, 46),
            muted: Color32::from_rgb(110, 122, 134),
            selection: Color32::from_rgb(190, 224, 235),
            accent: Color32::from_rgb(32, 120, 170),
            red: Color32::from_rgb(196, 64, 64),
            orange: Color32::from_rgb(206, 130, 40),
            green: Color32::from_rgb(46, 150, 90),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, egui::Theme::Dark);
    set_theme_variant(ctx, &theme.light, egui::Theme::Light);
}

fn widget(default: WidgetVisuals, bg: Color32, stroke: Color32, fg: Color32) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: bg,
        bg_stroke: Stroke { color: stroke, ..default.bg_stroke },
        fg_stroke: Stroke { color: fg, ..default.fg_stroke },
        ..default
    }
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, variant: egui::Theme) {
    let default = match variant {
        egui::Theme::Dark => Visuals::dark(),
        egui::Theme::Light => Visuals::light(),
    };
    let w = default.widgets.clone();

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: variant == egui::Theme::Dark,
            widgets: Widgets {
                noninteractive: widget(
                    w.noninteractive,
                    palette.surface,
                    palette.raised,
                    palette.foreground,
                ),
                inactive: widget(w.inactive, palette.raised, palette.raised, palette.foreground),
                hovered: widget(w.hovered, palette.selection, palette.accent, palette.foreground),
                active: widget(w.active, palette.selection, palette.accent, palette.foreground),
                open: widget(w.open, palette.surface, palette.accent, palette.foreground),
            },
            selection: Selection {
                bg_fill: palette.selection,
                stroke: Stroke { color: palette.foreground, ..default.selection.stroke },
            },
            hyperlink_color: palette.accent,
            faint_bg_color: palette.raised,
            extreme_bg_color: palette.background,
            error_fg_color: palette.red,
            warn_fg_color: palette.orange,
            window_fill: palette.surface,
            panel_fill: palette.background,
            ..default
        },
    );
}
