mod common;

use std::path::PathBuf;

use longan::RGBColor;
use longan::deck::{
    DeckBuilder, DeckConfig, DeckFile, Element, MemoryImageSource, Role, SignaturePolicy,
    SlideSpec,
};
use longan::layout::{LayoutGeometry, LayoutKind};

use common::{png, read_package, read_package_file, summarize};

fn slide_xml(entries: &std::collections::BTreeMap<String, Vec<u8>>, number: usize) -> &[u8] {
    entries
        .get(&format!("ppt/slides/slide{}.xml", number))
        .unwrap_or_else(|| panic!("slide{} missing", number))
}

#[test]
fn hbm4_big_number_with_missing_image() {
    let dir = tempfile::tempdir().unwrap();
    let spec = SlideSpec::new(LayoutKind::BigNumber, "HBM4")
        .with_lines(["## 22 TB/s", "Memory Bandwidth"])
        .with_image(dir.path().join("hbm4.png"));
    let builder = DeckBuilder::new(DeckConfig::default());

    let plan = &builder.plan(std::slice::from_ref(&spec))[0];
    let zones = builder.engine().big_number();
    assert_eq!(plan.element(Role::Title).unwrap().zone(), zones.title);
    assert_eq!(plan.picture_count(), 0);

    let Some(Element::Text { paragraphs, zone, .. }) = plan.element(Role::Number) else {
        panic!("no number element");
    };
    assert_eq!(*zone, zones.number);
    assert_eq!(paragraphs[0].text, "22 TB/s");
    assert_eq!(paragraphs[0].style.color, RGBColor::GOLD);
    assert!(paragraphs[0].style.bold);

    let Some(Element::Text { paragraphs, .. }) = plan.element(Role::Unit) else {
        panic!("no unit element");
    };
    assert_eq!(paragraphs[0].text, "Memory Bandwidth");
    assert_eq!(paragraphs[0].style.color, RGBColor::LIGHT_GRAY);
    assert!(!paragraphs[0].style.bold);
    assert!(plan.element(Role::Explanation).is_none());

    let out = dir.path().join("hbm4.pptx");
    let report = builder.save(&[spec], &out).unwrap();
    assert_eq!(report.slide_count, 1);
    assert_eq!(report.skipped_images, 1);

    let entries = read_package_file(&out);
    let slide = summarize(slide_xml(&entries, 1));
    assert_eq!(slide.pictures, 0);
    assert!(slide.contains_text("HBM4"));
    assert!(slide.contains_text("22 TB/s"));
    assert!(slide.contains_text("Memory Bandwidth"));
    assert!(!entries.keys().any(|name| name.starts_with("ppt/media/")));
}

#[test]
fn missing_image_keeps_title_and_body() {
    let dir = tempfile::tempdir().unwrap();
    let specs = vec![
        SlideSpec::new(LayoutKind::Split, "Engram")
            .with_lines(["# Conditional memory", "O(1) lookup"])
            .with_image(dir.path().join("nowhere.png")),
    ];
    let mut config = DeckConfig::default();
    config.signature.policy = SignaturePolicy::None;

    let out = dir.path().join("split.pptx");
    let report = DeckBuilder::new(config).save(&specs, &out).unwrap();
    assert_eq!(report.skipped_images, 1);

    let entries = read_package_file(&out);
    let slide = summarize(slide_xml(&entries, 1));
    assert_eq!(slide.pictures, 0);
    assert_eq!(slide.text_shapes, 2);
    assert!(slide.contains_text("Engram"));
    assert!(slide.contains_text("O(1) lookup"));
}

#[test]
fn missing_image_on_closing_slide_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let specs = vec![
        SlideSpec::new(LayoutKind::Closing, "Thanks")
            .with_lines(["Q & A"])
            .with_image(dir.path().join("gone.png")),
    ];
    let report = DeckBuilder::new(DeckConfig::default())
        .save(&specs, dir.path().join("closing.pptx"))
        .unwrap();
    assert_eq!(report.skipped_images, 1);
}

#[test]
fn standard_image_never_covers_body_text() {
    for geometry in [LayoutGeometry::widescreen(), LayoutGeometry::standard()] {
        let config = DeckConfig {
            geometry,
            ..DeckConfig::default()
        };
        let images = MemoryImageSource::new()
            .with_image("tall.png", png(100, 2000))
            .with_image("wide.png", png(2000, 100));
        let builder = DeckBuilder::new(config).with_image_source(Box::new(images));

        for image in ["tall.png", "wide.png"] {
            let spec = SlideSpec::new(LayoutKind::Standard, "Agenda")
                .with_lines(["# HBM4", "Engram"])
                .with_image(image);
            let plan = &builder.plan(&[spec])[0];
            let body = plan.element(Role::Body).unwrap().zone();
            let picture = plan.elements.iter().find(|e| e.is_picture()).unwrap().zone();
            assert!(!body.overlaps(&picture), "{}: body {} picture {}", image, body, picture);
            assert!(picture.right() <= builder.config().geometry.canvas.width.emus());
        }
    }
}

#[test]
fn first_and_last_policy_signs_only_the_ends() {
    let specs: Vec<SlideSpec> = ["Cover", "One", "Two", "End"]
        .iter()
        .map(|t| SlideSpec::new(LayoutKind::Standard, *t).with_lines(["line"]))
        .collect();
    let bytes = DeckBuilder::new(DeckConfig::default())
        .to_bytes(&specs)
        .unwrap();
    let entries = read_package(&bytes);

    let signed: Vec<bool> = (1..=4)
        .map(|n| summarize(slide_xml(&entries, n)).contains_text("王理"))
        .collect();
    assert_eq!(signed, vec![true, false, false, true]);
}

#[test]
fn single_slide_deck_is_signed_once() {
    let specs = vec![SlideSpec::new(LayoutKind::Closing, "Thank you")];
    let bytes = DeckBuilder::new(DeckConfig::default())
        .to_bytes(&specs)
        .unwrap();
    let slide = summarize(slide_xml(&read_package(&bytes), 1));
    assert_eq!(slide.texts.iter().filter(|t| t.contains("王理")).count(), 1);
}

#[test]
fn saving_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let images = MemoryImageSource::new().with_image("cover.png", png(320, 180));
    let specs = vec![
        SlideSpec::new(LayoutKind::Title, "内存的战争")
            .with_lines(["NVIDIA Rubin vs. DeepSeek Engram"])
            .with_image("cover.png")
            .with_notes("Open with the bandwidth wall."),
        SlideSpec::new(LayoutKind::BigNumber, "HBM4").with_lines(["## 22 TB/s", "Memory Bandwidth"]),
        SlideSpec::new(LayoutKind::Split, "Reuse")
            .with_lines(["same picture"])
            .with_image("cover.png"),
        SlideSpec::new(LayoutKind::Closing, "谢谢").with_lines(["Q & A"]),
    ];
    let builder = DeckBuilder::new(DeckConfig::default()).with_image_source(Box::new(images));

    assert_eq!(builder.plan(&specs), builder.plan(&specs));

    let first = dir.path().join("a.pptx");
    let second = dir.path().join("b.pptx");
    builder.save(&specs, &first).unwrap();
    builder.save(&specs, &second).unwrap();
    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());

    // Both slides share one media part
    let entries = read_package_file(&first);
    let media: Vec<&String> = entries
        .keys()
        .filter(|name| name.starts_with("ppt/media/"))
        .collect();
    assert_eq!(media.len(), 1);
    assert!(entries.contains_key("ppt/notesSlides/notesSlide1.xml"));
}

#[test]
fn every_part_is_well_formed() {
    let images = MemoryImageSource::new().with_image("a.png", png(40, 40));
    let specs = vec![
        SlideSpec::new(LayoutKind::Title, "Cover <draft>")
            .with_image("a.png")
            .with_notes("line one\nline two & more"),
        SlideSpec::new(LayoutKind::Standard, "Body").with_lines(["# \"quoted\"", "a < b"]),
    ];
    let bytes = DeckBuilder::new(DeckConfig::default())
        .with_image_source(Box::new(images))
        .to_bytes(&specs)
        .unwrap();
    let entries = read_package(&bytes);

    assert!(entries.contains_key("[Content_Types].xml"));
    assert!(entries.contains_key("_rels/.rels"));
    assert!(entries.contains_key("ppt/presentation.xml"));
    for (name, data) in &entries {
        if name.ends_with(".xml") || name.ends_with(".rels") {
            summarize(data);
        }
    }

    let content_types = String::from_utf8_lossy(&entries["[Content_Types].xml"]).into_owned();
    assert!(content_types.contains(r#"Extension="png""#));
    let slide = summarize(slide_xml(&entries, 2));
    assert!(slide.contains_text("a < b"));
}

#[test]
fn cover_image_never_reaches_subtitle() {
    let images = MemoryImageSource::new()
        .with_image("tall.png", png(100, 2000))
        .with_image("wide.png", png(2000, 100));
    let builder = DeckBuilder::new(DeckConfig::default()).with_image_source(Box::new(images));
    let subtitle_top = builder.engine().cover().subtitle.top;

    for image in ["tall.png", "wide.png"] {
        let spec = SlideSpec::new(LayoutKind::Title, "Cover")
            .with_lines(["subtitle"])
            .with_image(image);
        let plan = &builder.plan(&[spec])[0];
        let picture = plan.elements.iter().find(|e| e.is_picture()).unwrap();
        assert!(picture.zone().bottom() <= subtitle_top, "{} overflows", image);
        let subtitle = plan.element(Role::Subtitle).unwrap();
        assert!(!picture.zone().overlaps(&subtitle.zone()));
    }
}

#[test]
fn split_image_never_overlaps_text_column() {
    for geometry in [LayoutGeometry::widescreen(), LayoutGeometry::standard()] {
        let config = DeckConfig {
            geometry,
            ..DeckConfig::default()
        };
        let images = MemoryImageSource::new().with_image("wide.png", png(3000, 100));
        let builder = DeckBuilder::new(config).with_image_source(Box::new(images));
        let spec = SlideSpec::new(LayoutKind::Split, "Split")
            .with_lines(["text"])
            .with_image("wide.png");
        let plan = &builder.plan(&[spec])[0];

        let text = plan.element(Role::Body).unwrap().zone();
        let picture = plan.elements.iter().find(|e| e.is_picture()).unwrap().zone();
        assert!(!text.overlaps(&picture));
        assert!(text.horizontal_gap_to(&picture) >= builder.config().geometry.split_gap.emus());
        assert!(picture.right() <= builder.config().geometry.canvas.width.emus());
    }
}

#[test]
fn emphasis_lines_respect_the_clamp() {
    let mut config = DeckConfig::default();
    config.typography.big_number_size = 150.0;
    config.typography.number_size = 180.0;
    config.signature.policy = SignaturePolicy::None;

    let specs = vec![
        SlideSpec::new(LayoutKind::Standard, "Body").with_lines(["## 99.9%"]),
        SlideSpec::new(LayoutKind::BigNumber, "Number").with_lines(["## 22 TB/s"]),
    ];
    let entries = read_package(&DeckBuilder::new(config).to_bytes(&specs).unwrap());

    for n in 1..=2 {
        let slide = summarize(slide_xml(&entries, n));
        assert!(!slide.sizes.is_empty());
        assert!(
            slide.sizes.iter().all(|&sz| sz <= 12_000),
            "slide {} sizes {:?}",
            n,
            slide.sizes
        );
    }
}

#[test]
fn deck_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("img")).unwrap();
    std::fs::write(dir.path().join("img/cover.png"), png(800, 600)).unwrap();
    std::fs::write(
        dir.path().join("memory.yaml"),
        "\
title: The Architecture of Memory
output: out/memory.pptx
geometry: { canvas: 4x3 }
signature: { style: footer }
slides:
  - { layout: title, title: \"内存的战争\", body_lines: [\"NVIDIA Rubin vs. DeepSeek Engram\"], image: img/cover.png }
  - { layout: standard, title: Agenda, body_lines: [\"# HBM4\", Engram] }
  - { layout: closing, title: Thanks }
",
    )
    .unwrap();

    let deck = DeckFile::load(dir.path().join("memory.yaml")).unwrap();
    deck.config.validate().unwrap();
    let output: PathBuf = deck.config.output.clone().unwrap();
    std::fs::create_dir_all(output.parent().unwrap()).unwrap();

    let (config, slides) = deck.into_parts();
    let report = DeckBuilder::new(config).save(&slides, &output).unwrap();
    assert_eq!(report.slide_count, 3);
    assert_eq!(report.skipped_images, 0);

    let entries = read_package_file(&output);
    let presentation = String::from_utf8_lossy(&entries["ppt/presentation.xml"]).into_owned();
    assert!(presentation.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));

    let cover = summarize(slide_xml(&entries, 1));
    assert_eq!(cover.pictures, 1);
    assert!(cover.contains_text("天翼云湖北分公司 作者：王理"));

    let core = String::from_utf8_lossy(&entries["docProps/core.xml"]).into_owned();
    assert!(core.contains("The Architecture of Memory"));
}
