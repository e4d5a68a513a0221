// SPDX-License-Identifier: MPL-2.0
use iced_album::album::{save_album, AlbumLayout, Selection};
use iced_album::config::{self, Config};
use iced_album::error::{Error, ValidationError};
use iced_album::i18n::fluent::I18n;
use iced_album::media::{load_thumbnail, MAX_THUMBNAIL_HEIGHT, MAX_THUMBNAIL_WIDTH};
use image_rs::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_photo(dir: &Path, name: &str, width: u32, height: u32, tint: u8) -> PathBuf {
    let path = dir.join(name);
    let image = RgbaImage::from_pixel(width, height, Rgba([tint, 64, 128, 255]));
    image.save(&path).expect("failed to write photo");
    path
}

#[test]
fn album_workflow_from_too_few_to_saved_directory() {
    let dir = tempdir().expect("failed to create temporary directory");
    let mut selection = Selection::new();

    // Four images: viewing must fail with TooFew.
    for i in 0..4 {
        let path = write_photo(dir.path(), &format!("photo_{i}.png"), 320, 240, i as u8);
        selection.add(vec![path]);
    }
    match AlbumLayout::for_images(selection.len()) {
        Err(Error::Validation(ValidationError::TooFew { count })) => assert_eq!(count, 4),
        other => panic!("expected TooFew for 4 images, got {other:?}"),
    }

    // Two more (total 6): a 5-column grid of two rows, the second padded
    // with four placeholders.
    for i in 4..6 {
        let path = write_photo(dir.path(), &format!("photo_{i}.png"), 320, 240, i as u8);
        selection.add(vec![path]);
    }
    let layout = AlbumLayout::for_images(selection.len()).expect("6 images are a valid album");
    assert_eq!(layout.columns, 5);
    assert_eq!(layout.rows, 2);
    assert_eq!(layout.trailing_placeholders, 4);

    // Every thumbnail loads within the 300x300 bound.
    for path in selection.paths() {
        let thumb = load_thumbnail(path, MAX_THUMBNAIL_WIDTH, MAX_THUMBNAIL_HEIGHT)
            .expect("album photos should produce thumbnails");
        assert!(thumb.width <= MAX_THUMBNAIL_WIDTH);
        assert!(thumb.height <= MAX_THUMBNAIL_HEIGHT);
    }

    // Saving as "Trip1" lands exactly six byte-identical copies.
    let root = dir.path().join("Albums");
    let saved = save_album(&root, "Trip1", selection.paths()).expect("save should succeed");
    assert_eq!(saved.path, root.join("Trip1"));
    assert_eq!(saved.copied, 6);

    let mut copies: Vec<_> = fs::read_dir(&saved.path)
        .expect("album directory should exist")
        .map(|entry| entry.expect("readable entry").path())
        .collect();
    copies.sort();
    assert_eq!(copies.len(), 6);

    for source in selection.paths() {
        let copy = saved.path.join(source.file_name().expect("source has a name"));
        let original_bytes = fs::read(source).expect("read original");
        let copied_bytes = fs::read(&copy).expect("read copy");
        assert_eq!(
            original_bytes,
            copied_bytes,
            "{} must match its original byte-for-byte",
            copy.display()
        );
    }

    // The selection survives the save for further editing.
    assert_eq!(selection.len(), 6);
}

#[test]
fn saving_the_same_album_name_twice_fails_without_touching_the_first() {
    let dir = tempdir().expect("failed to create temporary directory");
    let sources: Vec<PathBuf> = (0..5)
        .map(|i| write_photo(dir.path(), &format!("img_{i}.png"), 64, 64, i as u8))
        .collect();
    let root = dir.path().join("Albums");

    let first = save_album(&root, "Weekend", &sources).expect("first save should succeed");
    let before: Vec<_> = fs::read_dir(&first.path)
        .expect("read album")
        .map(|e| e.expect("entry").path())
        .collect();

    match save_album(&root, "Weekend", &sources) {
        Err(Error::DuplicateAlbum { name }) => assert_eq!(name, "Weekend"),
        other => panic!("expected DuplicateAlbum, got {other:?}"),
    }

    let after: Vec<_> = fs::read_dir(&first.path)
        .expect("read album again")
        .map(|e| e.expect("entry").path())
        .collect();
    assert_eq!(before.len(), after.len());
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to ro
    let romanian_config = Config {
        language: Some("ro".to_string()),
        ..Config::default()
    };
    config::save_to_path(&romanian_config, &temp_config_file_path)
        .expect("Failed to write romanian config file");

    let loaded_romanian_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load romanian config from path");
    let i18n_ro = I18n::new(None, &loaded_romanian_config);
    assert_eq!(i18n_ro.current_locale().to_string(), "ro");

    // The Romanian bundle localizes the album actions.
    assert_eq!(i18n_ro.tr("button-add-images"), "Adaugă imagini");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn add_cap_holds_across_repeated_picker_batches() {
    let dir = tempdir().expect("failed to create temporary directory");
    let mut selection = Selection::new();

    let first_batch: Vec<PathBuf> = (0..8)
        .map(|i| write_photo(dir.path(), &format!("batch1_{i}.png"), 16, 16, i as u8))
        .collect();
    let second_batch: Vec<PathBuf> = (0..6)
        .map(|i| write_photo(dir.path(), &format!("batch2_{i}.png"), 16, 16, i as u8))
        .collect();

    let first = selection.add(first_batch.clone());
    assert_eq!(first.added.len(), 8);

    // Re-adding the first batch is all duplicates.
    let repeat = selection.add(first_batch);
    assert!(repeat.added.is_empty());
    assert_eq!(repeat.duplicates, 8);

    // Only two of the second batch fit under the cap.
    let second = selection.add(second_batch);
    assert_eq!(second.added.len(), 2);
    assert_eq!(second.at_capacity, 4);
    assert_eq!(selection.len(), 10);

    // A full selection still forms a valid album.
    AlbumLayout::for_images(selection.len()).expect("10 images are a valid album");
}
