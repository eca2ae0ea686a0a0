//! Hover and touch state for the map tooltip.
//!
//! The tooltip is recomputed only when the pointer enters a different
//! country. While it stays on the same country the existing
//! `Rc<TooltipState>` is kept, so placement does not jitter with the cursor.

use crate::color_resolver::{visa_status, MapMode, VisaStatus};
use crate::data::{CountryCode, DataStore, Month, MonthRecord, RawId, WeatherCondition};
use eframe::egui::{Pos2, Rect, Vec2};
use std::rc::Rc;
use std::time::Duration;
use web_time::Instant;

/// Delay before a lifted touch hides the tooltip.
pub const TOUCH_RELEASE_DELAY: Duration = Duration::from_millis(150);
pub const TOOLTIP_WIDTH: f32 = 280.0;
/// Minimum gap between the tooltip and the surface edge.
pub const TOOLTIP_PADDING: f32 = 10.0;
/// Cursor offset from the tooltip edge.
pub const TOOLTIP_OFFSET: f32 = 12.0;
/// Fraction of the surface height below which the tooltip opens upward.
pub const FLIP_THRESHOLD: f32 = 0.6;

/// Everything the controller reads to build a tooltip.
pub struct InteractionContext<'a> {
    pub store: &'a DataStore,
    pub mode: &'a MapMode,
    /// Screen rectangle of the render surface.
    pub surface: Rect,
}

/// One region's climate for the hovered month.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSummary {
    pub name: String,
    pub description: String,
    pub record: MonthRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TooltipContent {
    Weather {
        month: Month,
        record: MonthRecord,
        condition: WeatherCondition,
        regions: Vec<RegionSummary>,
    },
    Visa {
        passport_name: String,
        status: VisaStatus,
    },
}

/// Where the tooltip box goes, relative to the surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    /// Left edge and the vertical edge nearest the cursor.
    pub anchor: Pos2,
    /// When true `anchor.y` is the box's bottom edge, otherwise its top.
    pub above: bool,
    pub width: f32,
}

impl TooltipPlacement {
    /// Places a box near `cursor` inside a surface of `size`.
    pub fn compute(cursor: Pos2, size: Vec2) -> Self {
        let above = cursor.y > size.y * FLIP_THRESHOLD;
        let max_x = size.x - TOOLTIP_WIDTH - TOOLTIP_PADDING;
        let x = (cursor.x - TOOLTIP_WIDTH / 2.0)
            .min(max_x)
            .max(TOOLTIP_PADDING);
        let y = if above {
            cursor.y - TOOLTIP_OFFSET
        } else {
            cursor.y + TOOLTIP_OFFSET
        };
        Self {
            anchor: Pos2::new(x, y),
            above,
            width: TOOLTIP_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub code: CountryCode,
    pub name: String,
    pub content: TooltipContent,
    /// Cursor position relative to the surface when the tooltip opened.
    pub cursor: Pos2,
    pub placement: TooltipPlacement,
}

#[derive(Debug, Default)]
pub struct InteractionController {
    tooltip: Option<Rc<TooltipState>>,
    release_at: Option<Instant>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tooltip(&self) -> Option<&Rc<TooltipState>> {
        self.tooltip.as_ref()
    }

    pub fn hovered_code(&self) -> Option<&CountryCode> {
        self.tooltip.as_deref().map(|t| &t.code)
    }

    /// Pointer moved over a feature identified by `ids`.
    pub fn on_hover(&mut self, pos: Pos2, ids: &[RawId], ctx: &InteractionContext<'_>) {
        self.release_at = None;

        let Some(code) = ctx.store.index().resolve_first(ids) else {
            self.clear();
            return;
        };

        if self.hovered_code() == Some(&code) {
            return;
        }

        let Some(content) = build_content(&code, ctx) else {
            return;
        };

        let cursor = (pos - ctx.surface.min).to_pos2();
        log::debug!("Tooltip for {}", code);
        self.tooltip = Some(Rc::new(TooltipState {
            name: ctx.store.display_name(&code),
            code,
            content,
            cursor,
            placement: TooltipPlacement::compute(cursor, ctx.surface.size()),
        }));
    }

    /// Pointer left the map or moved over the ocean.
    pub fn on_leave(&mut self) {
        self.release_at = None;
        self.clear();
    }

    /// Touch began on a feature. Shows immediately and cancels a pending release.
    pub fn on_touch_start(&mut self, pos: Pos2, ids: &[RawId], ctx: &InteractionContext<'_>) {
        self.on_hover(pos, ids, ctx);
    }

    /// Touch lifted. The tooltip is cleared after `TOUCH_RELEASE_DELAY`.
    pub fn on_touch_end(&mut self, now: Instant) {
        if self.tooltip.is_some() {
            self.release_at = Some(now + TOUCH_RELEASE_DELAY);
        }
    }

    pub fn is_release_pending(&self) -> bool {
        self.release_at.is_some()
    }

    /// Applies a pending touch release. Returns true while one is still pending.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.release_at {
            Some(at) if now >= at => {
                self.release_at = None;
                self.clear();
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Drops the tooltip, e.g. after the data or mode changed.
    pub fn clear(&mut self) {
        self.tooltip = None;
    }
}

fn build_content(code: &CountryCode, ctx: &InteractionContext<'_>) -> Option<TooltipContent> {
    match ctx.mode {
        MapMode::Weather { month, .. } => {
            let country = ctx.store.country(code)?;
            let record = country.month(*month)?.clone();
            let regions = country
                .regions
                .iter()
                .filter_map(|region| {
                    region.months.get(month).map(|record| RegionSummary {
                        name: region.name.clone(),
                        description: region.description.clone(),
                        record: record.clone(),
                    })
                })
                .collect();
            Some(TooltipContent::Weather {
                month: *month,
                condition: WeatherCondition::for_record(&record),
                record,
                regions,
            })
        }
        MapMode::Visa { passport } => {
            let passport = passport.as_ref()?;
            Some(TooltipContent::Visa {
                passport_name: ctx.store.display_name(passport),
                status: visa_status(ctx.store, passport, code),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_resolver::WeatherMetric;
    use crate::data::{parse_countries, VisaCategory, VisaMatrix};

    const COUNTRIES: &[u8] = br#"[
        {
            "name": "Brazil", "code": "BR",
            "monthlyData": {"september": {"avgDayTemp": 31, "avgNightTemp": 19, "rainfall": 60, "bestTime": "best"}},
            "regions": [
                {"name": "Amazon", "monthlyData": {"september": {"avgDayTemp": 33, "avgNightTemp": 23, "rainfall": 90}}},
                {"name": "South", "monthlyData": {"june": {"avgDayTemp": 18, "avgNightTemp": 9, "rainfall": 110}}}
            ]
        },
        {
            "name": "Japan", "code": "JP",
            "monthlyData": {"september": {"avgDayTemp": 27, "avgNightTemp": 20, "rainfall": 210}}
        }
    ]"#;

    fn store() -> DataStore {
        let mut visa = VisaMatrix::default();
        visa.insert("JPN", "BRA", VisaCategory::EVisa);
        let mut store = DataStore::new();
        store.install(parse_countries(COUNTRIES).unwrap(), visa);
        store
    }

    fn surface() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(1000.0, 600.0))
    }

    fn september() -> MapMode {
        MapMode::Weather {
            metric: WeatherMetric::Temperature,
            month: Month::September,
        }
    }

    #[test]
    fn test_hover_builds_weather_tooltip() {
        let store = store();
        let mode = september();
        let ctx = InteractionContext {
            store: &store,
            mode: &mode,
            surface: surface(),
        };
        let mut controller = InteractionController::new();
        controller.on_hover(Pos2::new(400.0, 200.0), &[RawId::Number(76)], &ctx);

        let tooltip = controller.tooltip().unwrap();
        assert_eq!(tooltip.code.as_str(), "BR");
        assert_eq!(tooltip.name, "Brazil");
        assert_eq!(tooltip.cursor, Pos2::new(300.0, 150.0));
        let TooltipContent::Weather { regions, record, .. } = &tooltip.content else {
            panic!("expected weather content");
        };
        assert_eq!(record.day_temp_c, 31.0);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].name, "Amazon");
    }

    #[test]
    fn test_rehover_keeps_same_tooltip() {
        let store = store();
        let mode = september();
        let ctx = InteractionContext {
            store: &store,
            mode: &mode,
            surface: surface(),
        };
        let mut controller = InteractionController::new();
        controller.on_hover(Pos2::new(400.0, 200.0), &["BRA".into()], &ctx);
        let first = controller.tooltip().cloned().unwrap();

        controller.on_hover(Pos2::new(420.0, 210.0), &["076".into()], &ctx);
        let second = controller.tooltip().cloned().unwrap();
        assert!(Rc::ptr_eq(&first, &second));

        controller.on_hover(Pos2::new(900.0, 200.0), &["JP".into()], &ctx);
        let third = controller.tooltip().cloned().unwrap();
        assert!(!Rc::ptr_eq(&first, &third));
        assert_eq!(third.code.as_str(), "JP");
    }

    #[test]
    fn test_unresolved_hover_clears() {
        let store = store();
        let mode = september();
        let ctx = InteractionContext {
            store: &store,
            mode: &mode,
            surface: surface(),
        };
        let mut controller = InteractionController::new();
        controller.on_hover(Pos2::new(400.0, 200.0), &["BR".into()], &ctx);
        controller.on_hover(Pos2::new(400.0, 200.0), &["-99".into()], &ctx);
        assert!(controller.tooltip().is_none());
    }

    #[test]
    fn test_resolved_without_record_keeps_previous() {
        let store = store();
        let mode = september();
        let ctx = InteractionContext {
            store: &store,
            mode: &mode,
            surface: surface(),
        };
        let mut controller = InteractionController::new();
        controller.on_hover(Pos2::new(400.0, 200.0), &["BR".into()], &ctx);
        let before = controller.tooltip().cloned().unwrap();

        // France resolves but has no curated record.
        controller.on_hover(Pos2::new(600.0, 100.0), &["FRA".into()], &ctx);
        let after = controller.tooltip().cloned().unwrap();
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_visa_tooltip() {
        let store = store();
        let mode = MapMode::Visa {
            passport: CountryCode::parse("JP"),
        };
        let ctx = InteractionContext {
            store: &store,
            mode: &mode,
            surface: surface(),
        };
        let mut controller = InteractionController::new();
        controller.on_hover(Pos2::new(400.0, 200.0), &["BR".into()], &ctx);
        assert_eq!(
            controller.tooltip().unwrap().content,
            TooltipContent::Visa {
                passport_name: "Japan".to_string(),
                status: VisaStatus::Requirement(VisaCategory::EVisa),
            }
        );

        controller.on_hover(Pos2::new(900.0, 200.0), &["JP".into()], &ctx);
        let TooltipContent::Visa { status, .. } = &controller.tooltip().unwrap().content else {
            panic!("expected visa content");
        };
        assert_eq!(*status, VisaStatus::Home);
    }

    #[test]
    fn test_visa_without_passport_leaves_tooltip_untouched() {
        let store = store();
        let mode = MapMode::Visa { passport: None };
        let ctx = InteractionContext {
            store: &store,
            mode: &mode,
            surface: surface(),
        };
        let mut controller = InteractionController::new();
        controller.on_hover(Pos2::new(400.0, 200.0), &["BR".into()], &ctx);
        assert!(controller.tooltip().is_none());
    }

    #[test]
    fn test_placement_flips_and_clamps() {
        let size = Vec2::new(1000.0, 600.0);

        let top = TooltipPlacement::compute(Pos2::new(500.0, 100.0), size);
        assert!(!top.above);
        assert_eq!(top.anchor, Pos2::new(360.0, 100.0 + TOOLTIP_OFFSET));

        let low = TooltipPlacement::compute(Pos2::new(500.0, 400.0), size);
        assert!(low.above);
        assert_eq!(low.anchor.y, 400.0 - TOOLTIP_OFFSET);

        let left = TooltipPlacement::compute(Pos2::new(5.0, 100.0), size);
        assert_eq!(left.anchor.x, TOOLTIP_PADDING);

        let right = TooltipPlacement::compute(Pos2::new(995.0, 100.0), size);
        assert_eq!(right.anchor.x, 1000.0 - TOOLTIP_WIDTH - TOOLTIP_PADDING);

        let narrow = TooltipPlacement::compute(Pos2::new(100.0, 100.0), Vec2::new(200.0, 300.0));
        assert_eq!(narrow.anchor.x, TOOLTIP_PADDING);
    }

    #[test]
    fn test_touch_release_is_delayed() {
        let store = store();
        let mode = september();
        let ctx = InteractionContext {
            store: &store,
            mode: &mode,
            surface: surface(),
        };
        let mut controller = InteractionController::new();
        let t0 = Instant::now();

        controller.on_touch_start(Pos2::new(400.0, 200.0), &["BR".into()], &ctx);
        controller.on_touch_end(t0);
        assert!(controller.tick(t0 + Duration::from_millis(100)));
        assert!(controller.tooltip().is_some());

        assert!(!controller.tick(t0 + TOUCH_RELEASE_DELAY));
        assert!(controller.tooltip().is_none());
    }

    #[test]
    fn test_touch_start_cancels_pending_release() {
        let store = store();
        let mode = september();
        let ctx = InteractionContext {
            store: &store,
            mode: &mode,
            surface: surface(),
        };
        let mut controller = InteractionController::new();
        let t0 = Instant::now();

        controller.on_touch_start(Pos2::new(400.0, 200.0), &["BR".into()], &ctx);
        controller.on_touch_end(t0);
        controller.on_touch_start(Pos2::new(900.0, 200.0), &["JP".into()], &ctx);
        assert!(!controller.tick(t0 + Duration::from_secs(1)));
        assert_eq!(controller.hovered_code().map(|c| c.as_str()), Some("JP"));
    }
}
