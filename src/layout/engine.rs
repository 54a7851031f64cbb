//! Zone computation for each layout kind.

use super::LayoutKind;
use super::geometry::LayoutGeometry;
use super::zone::LayoutZone;

/// Where a fitted picture sits inside its frame when it does not fill it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopCenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardZones {
    pub title: LayoutZone,
    pub body: LayoutZone,
}

/// A standard slide that carries a picture: narrowed text on the left, the
/// picture column on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardImageZones {
    pub title: LayoutZone,
    pub text: LayoutZone,
    pub image: LayoutZone,
}

impl StandardImageZones {
    pub fn named(&self) -> Vec<(&'static str, LayoutZone)> {
        vec![("title", self.title), ("text", self.text), ("image", self.image)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitZones {
    pub title: LayoutZone,
    pub text: LayoutZone,
    pub image: LayoutZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigNumberZones {
    pub title: LayoutZone,
    pub number: LayoutZone,
    pub unit: LayoutZone,
    pub explanation: LayoutZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverZones {
    pub title: LayoutZone,
    pub image_frame: LayoutZone,
    pub subtitle: LayoutZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosingZones {
    pub title: LayoutZone,
    pub subtitle: LayoutZone,
}

/// Zones of one layout kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideZones {
    Standard(StandardZones),
    Split(SplitZones),
    BigNumber(BigNumberZones),
    Cover(CoverZones),
    Closing(ClosingZones),
}

impl SlideZones {
    /// The title zone, which every kind has.
    pub fn title(&self) -> LayoutZone {
        match self {
            SlideZones::Standard(z) => z.title,
            SlideZones::Split(z) => z.title,
            SlideZones::BigNumber(z) => z.title,
            SlideZones::Cover(z) => z.title,
            SlideZones::Closing(z) => z.title,
        }
    }

    /// Zones paired with their names, top to bottom then left to right.
    pub fn named(&self) -> Vec<(&'static str, LayoutZone)> {
        match self {
            SlideZones::Standard(z) => vec![("title", z.title), ("body", z.body)],
            SlideZones::Split(z) => vec![("title", z.title), ("text", z.text), ("image", z.image)],
            SlideZones::BigNumber(z) => vec![
                ("title", z.title),
                ("number", z.number),
                ("unit", z.unit),
                ("explanation", z.explanation),
            ],
            SlideZones::Cover(z) => vec![
                ("title", z.title),
                ("image_frame", z.image_frame),
                ("subtitle", z.subtitle),
            ],
            SlideZones::Closing(z) => vec![("title", z.title), ("subtitle", z.subtitle)],
        }
    }
}

/// Computes slide zones from a [`LayoutGeometry`].
///
/// Every method is a pure function of the geometry; calling one twice yields
/// the same rectangles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutEngine {
    geometry: LayoutGeometry,
}

impl LayoutEngine {
    pub fn new(geometry: LayoutGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &LayoutGeometry {
        &self.geometry
    }

    fn width(&self) -> i64 {
        self.geometry.canvas.width.emus()
    }

    fn height(&self) -> i64 {
        self.geometry.canvas.height.emus()
    }

    /// Title box inset by the margin on both sides.
    fn inset_title(&self, height: i64) -> LayoutZone {
        let g = &self.geometry;
        let margin = g.margin.emus();
        LayoutZone::new(margin, g.title_top.emus(), self.width() - 2 * margin, height)
    }

    pub fn standard(&self) -> StandardZones {
        let g = &self.geometry;
        let inset = g.body_inset.emus();
        StandardZones {
            title: self.inset_title(g.title_height.emus()),
            body: LayoutZone::new(
                inset,
                g.body_top.emus(),
                self.width() - 2 * inset,
                g.body_height.emus(),
            ),
        }
    }

    /// Zones for a standard slide with a picture. The text column keeps the
    /// body's left edge; the picture starts `split_gap` after it and runs to
    /// the body's right edge.
    pub fn standard_with_image(&self) -> StandardImageZones {
        let g = &self.geometry;
        let body = self.standard().body;
        let text = LayoutZone::new(body.left, body.top, g.standard_text_width.emus(), body.height);
        let image_left = text.right() + g.split_gap.emus();

        StandardImageZones {
            title: self.inset_title(g.title_height.emus()),
            text,
            image: LayoutZone::new(image_left, body.top, body.right() - image_left, body.height),
        }
    }

    pub fn split(&self) -> SplitZones {
        let g = &self.geometry;
        let margin = g.margin.emus();
        let text = LayoutZone::new(
            margin,
            g.body_top.emus(),
            g.split_text_width.emus(),
            g.body_height.emus(),
        );
        let image_left = text.right() + g.split_gap.emus();
        let image_width = match g.split_image_width {
            Some(width) => width.emus(),
            None => self.width() - margin - image_left,
        };

        SplitZones {
            title: self.inset_title(g.title_height.emus()),
            text,
            image: LayoutZone::new(image_left, g.body_top.emus(), image_width, g.body_height.emus()),
        }
    }

    pub fn big_number(&self) -> BigNumberZones {
        let g = &self.geometry;
        let width = self.width();
        let inset = g.body_inset.emus();

        let number = LayoutZone::new(0, g.number_top.emus(), width, g.number_height.emus());
        let unit = LayoutZone::new(0, number.bottom(), width, g.unit_height.emus());
        let explanation = LayoutZone::new(
            inset,
            unit.bottom() + g.explanation_gap.emus(),
            width - 2 * inset,
            g.explanation_height.emus(),
        );

        BigNumberZones {
            title: self.inset_title(g.big_number_title_height.emus()),
            number,
            unit,
            explanation,
        }
    }

    pub fn cover(&self) -> CoverZones {
        let g = &self.geometry;
        let margin = g.margin.emus();
        let width = self.width();

        let title = LayoutZone::new(
            margin,
            g.cover_title_top.emus(),
            width - 2 * margin,
            g.cover_title_height.emus(),
        );
        let subtitle = LayoutZone::new(0, g.cover_subtitle_top.emus(), width, g.subtitle_height.emus());

        let image_top = g.cover_image_top.emus();
        let image_height = (subtitle.top - image_top)
            .min(g.cover_image_max_height.emus())
            .max(0);
        let image_frame = LayoutZone::new(margin, image_top, width - 2 * margin, image_height);

        CoverZones {
            title,
            image_frame,
            subtitle,
        }
    }

    pub fn closing(&self) -> ClosingZones {
        let g = &self.geometry;
        let width = self.width();
        ClosingZones {
            title: LayoutZone::new(
                0,
                g.closing_title_top.emus(),
                width,
                g.closing_title_height.emus(),
            ),
            subtitle: LayoutZone::new(
                0,
                g.closing_subtitle_top.emus(),
                width,
                g.subtitle_height.emus(),
            ),
        }
    }

    /// Two-line signature block, centered and pinned above the bottom edge.
    pub fn signature(&self) -> LayoutZone {
        let g = &self.geometry;
        let width = g.signature_width.emus();
        LayoutZone::new(
            (self.width() - width) / 2,
            self.height() - g.signature_bottom_inset.emus(),
            width,
            g.signature_height.emus(),
        )
    }

    /// Full-width strip along the bottom edge.
    pub fn footer(&self) -> LayoutZone {
        let height = self.geometry.footer_height.emus();
        LayoutZone::new(0, self.height() - height, self.width(), height)
    }

    pub fn zones(&self, kind: LayoutKind) -> SlideZones {
        match kind {
            LayoutKind::Standard => SlideZones::Standard(self.standard()),
            LayoutKind::Split => SlideZones::Split(self.split()),
            LayoutKind::BigNumber => SlideZones::BigNumber(self.big_number()),
            LayoutKind::Title => SlideZones::Cover(self.cover()),
            LayoutKind::Closing => SlideZones::Closing(self.closing()),
        }
    }

    /// Size a picture of `pixels` (width, height) to fit inside `frame`.
    ///
    /// The picture keeps its aspect ratio and never leaves the frame. A
    /// zero-sized picture, or an empty frame, yields the frame itself.
    pub fn fit_image(&self, frame: LayoutZone, pixels: (u32, u32), anchor: Anchor) -> LayoutZone {
        let (px_w, px_h) = pixels;
        if px_w == 0 || px_h == 0 || frame.is_empty() {
            return frame;
        }

        let scale = (frame.width as f64 / px_w as f64).min(frame.height as f64 / px_h as f64);
        let width = ((px_w as f64 * scale).floor() as i64).clamp(1, frame.width);
        let height = ((px_h as f64 * scale).floor() as i64).clamp(1, frame.height);

        let (left, top) = match anchor {
            Anchor::TopLeft => (frame.left, frame.top),
            Anchor::TopCenter => (frame.left + (frame.width - width) / 2, frame.top),
        };

        LayoutZone::new(left, top, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::inches_to_emu;
    use proptest::prelude::*;

    fn inch(value: f64) -> i64 {
        inches_to_emu(value)
    }

    #[test]
    fn test_standard_zones() {
        let engine = LayoutEngine::new(LayoutGeometry::widescreen());
        let zones = engine.standard();
        assert_eq!(
            zones.title,
            LayoutZone::new(inch(0.5), inch(0.3), 12_192_000 - inch(1.0), inch(1.5))
        );
        assert_eq!(
            zones.body,
            LayoutZone::new(inch(1.0), inch(2.0), 12_192_000 - inch(2.0), inch(4.5))
        );
    }

    #[test]
    fn test_split_image_runs_to_margin() {
        let engine = LayoutEngine::new(LayoutGeometry::widescreen());
        let zones = engine.split();
        assert_eq!(zones.text.right(), inch(6.0));
        assert_eq!(zones.image.left, inch(6.5));
        assert_eq!(zones.image.right(), 12_192_000 - inch(0.5));
        assert!(!zones.text.overlaps(&zones.image));
    }

    #[test]
    fn test_split_fixed_image_width() {
        let mut geometry = LayoutGeometry::widescreen();
        geometry.split_image_width = Some(crate::common::Length::from_inches(6.3));
        let zones = LayoutEngine::new(geometry).split();
        assert_eq!(zones.image.width, inch(6.3));
    }

    #[test]
    fn test_big_number_stack() {
        let zones = LayoutEngine::new(LayoutGeometry::widescreen()).big_number();
        assert_eq!(zones.number.top, inch(2.2));
        assert_eq!(zones.unit.top, zones.number.bottom());
        assert_eq!(zones.explanation.top, inch(5.2));
        assert_eq!(zones.number.width, 12_192_000);
        assert!(zones.title.bottom() <= zones.number.top);
    }

    #[test]
    fn test_cover_frame_is_capped() {
        let zones = LayoutEngine::new(LayoutGeometry::widescreen()).cover();
        assert_eq!(zones.image_frame.top, inch(2.3));
        assert_eq!(zones.image_frame.height, inch(2.8));
        assert!(zones.image_frame.bottom() <= zones.subtitle.top);
        assert!(zones.title.bottom() <= zones.image_frame.top);
    }

    #[test]
    fn test_signature_and_footer() {
        let engine = LayoutEngine::new(LayoutGeometry::widescreen());
        let signature = engine.signature();
        assert_eq!(signature.left, (12_192_000 - inch(5.0)) / 2);
        assert_eq!(signature.top, 6_858_000 - inch(1.0));

        let footer = engine.footer();
        assert_eq!(footer.bottom(), 6_858_000);
        assert_eq!(footer.width, 12_192_000);
    }

    #[test]
    fn test_zones_dispatch() {
        let engine = LayoutEngine::new(LayoutGeometry::standard());
        assert_eq!(
            engine.zones(LayoutKind::Title),
            SlideZones::Cover(engine.cover())
        );
        assert_eq!(engine.zones(LayoutKind::Split).named().len(), 3);
        assert_eq!(engine.zones(LayoutKind::Closing).title(), engine.closing().title);
    }

    #[test]
    fn test_fit_wide_image_top_center() {
        let engine = LayoutEngine::default();
        let frame = LayoutZone::new(0, 0, 1000, 500);
        let fitted = engine.fit_image(frame, (400, 100), Anchor::TopCenter);
        assert_eq!(fitted, LayoutZone::new(0, 0, 1000, 250));

        let fitted = engine.fit_image(frame, (100, 100), Anchor::TopCenter);
        assert_eq!(fitted, LayoutZone::new(250, 0, 500, 500));
    }

    #[test]
    fn test_standard_with_image_columns() {
        let engine = LayoutEngine::new(LayoutGeometry::widescreen());
        let body = engine.standard().body;
        let zones = engine.standard_with_image();
        assert_eq!(zones.text, LayoutZone::new(inch(1.0), inch(2.0), inch(4.5), inch(4.5)));
        assert_eq!(zones.image.left, inch(6.0));
        assert_eq!(zones.image.right(), body.right());
        assert!(!zones.text.overlaps(&zones.image));
        assert!(body.contains(&zones.text) && body.contains(&zones.image));
    }

    #[test]
    fn test_fit_degenerate_pixels() {
        let engine = LayoutEngine::default();
        let frame = LayoutZone::new(10, 10, 100, 100);
        assert_eq!(engine.fit_image(frame, (0, 50), Anchor::TopLeft), frame);
        assert_eq!(engine.fit_image(frame, (50, 0), Anchor::TopCenter), frame);
    }

    proptest! {
        #[test]
        fn prop_split_columns_never_touch(k in 4u32..=24, standard in any::<bool>()) {
            let base = if standard { LayoutGeometry::standard() } else { LayoutGeometry::widescreen() };
            let geometry = base.scaled(k as f64 / 8.0);
            let zones = LayoutEngine::new(geometry.clone()).split();
            prop_assert!(zones.text.right() + geometry.split_gap.emus() <= zones.image.left);
            let standard = LayoutEngine::new(geometry.clone()).standard_with_image();
            prop_assert!(standard.text.right() + geometry.split_gap.emus() <= standard.image.left);
            prop_assert!(geometry.validate().is_ok());
        }

        #[test]
        fn prop_fitted_image_stays_in_frame(
            left in 0i64..1_000_000,
            top in 0i64..1_000_000,
            width in 1i64..20_000_000,
            height in 1i64..20_000_000,
            px_w in 1u32..10_000,
            px_h in 1u32..10_000,
        ) {
            let engine = LayoutEngine::default();
            let frame = LayoutZone::new(left, top, width, height);
            for anchor in [Anchor::TopLeft, Anchor::TopCenter] {
                let fitted = engine.fit_image(frame, (px_w, px_h), anchor);
                prop_assert!(frame.contains(&fitted), "{:?} escaped {:?}", fitted, frame);
            }
        }

        #[test]
        fn prop_cover_image_clears_subtitle(px_w in 1u32..8_000, px_h in 1u32..8_000, k in 4u32..=24) {
            let engine = LayoutEngine::new(LayoutGeometry::widescreen().scaled(k as f64 / 8.0));
            let cover = engine.cover();
            let fitted = engine.fit_image(cover.image_frame, (px_w, px_h), Anchor::TopCenter);
            prop_assert!(fitted.bottom() <= cover.subtitle.top);
            prop_assert!(!fitted.overlaps(&cover.title));
        }
    }
}
