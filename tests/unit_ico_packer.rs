//! Unit tests for the ICO packer
//!
//! These tests verify the container layout byte for byte: header fields,
//! directory entry encoding, cumulative offsets, and the 256-encodes-as-0
//! width/height rule.

use iconsmith::iconsmith::Rgb;
use iconsmith::iconsmith::ico_packer::{IcoImage, pack_ico};
use iconsmith::iconsmith::png_encoder::{PNG_SIGNATURE, encode_solid};

const HEADER_LEN: usize = 6;
const DIR_ENTRY_LEN: usize = 16;

/// The 16-byte directory entry at the given index
fn entry(bytes: &[u8], index: usize) -> &[u8] {
    let start = HEADER_LEN + DIR_ENTRY_LEN * index;
    &bytes[start..start + DIR_ENTRY_LEN]
}

fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes(bytes.try_into().unwrap())
}

#[test]
fn test_header_fields() {
    let packed = pack_ico(&[IcoImage::new(vec![1, 2, 3], 16)]);
    assert_eq!(&packed[0..2], &[0, 0], "reserved field must be 0");
    assert_eq!(&packed[2..4], &1u16.to_le_bytes(), "type must be 1 (icon)");
    assert_eq!(&packed[4..6], &1u16.to_le_bytes(), "count must match entries");
}

#[test]
fn test_output_length_property() {
    let images = vec![
        IcoImage::new(vec![0u8; 11], 16),
        IcoImage::new(vec![0u8; 307], 32),
        IcoImage::new(vec![0u8; 2], 48),
    ];
    let payload_total: usize = images.iter().map(|image| image.data.len()).sum();
    let packed = pack_ico(&images);
    assert_eq!(
        packed.len(),
        HEADER_LEN + DIR_ENTRY_LEN * images.len() + payload_total,
        "output length must be header + directory + payloads"
    );
}

#[test]
fn test_directory_entries_reference_exact_payloads() {
    let images = vec![
        IcoImage::new(vec![0xAA; 9], 16),
        IcoImage::new(vec![0xBB; 33], 32),
        IcoImage::new(vec![0xCC; 5], 64),
    ];
    let packed = pack_ico(&images);

    let mut expected_offset = (HEADER_LEN + DIR_ENTRY_LEN * images.len()) as u32;
    for (index, image) in images.iter().enumerate() {
        let entry = entry(&packed, index);
        assert_eq!(entry[2], 0, "color palette byte must be 0");
        assert_eq!(entry[3], 0, "reserved byte must be 0");
        assert_eq!(&entry[4..6], &1u16.to_le_bytes(), "color planes must be 1");
        assert_eq!(&entry[6..8], &32u16.to_le_bytes(), "bits per pixel must be 32");

        let data_len = read_u32_le(&entry[8..12]);
        let data_offset = read_u32_le(&entry[12..16]);
        assert_eq!(data_len as usize, image.data.len(), "entry size must match payload");
        assert_eq!(data_offset, expected_offset, "offsets must accumulate in order");
        assert_eq!(
            &packed[data_offset as usize..(data_offset + data_len) as usize],
            &image.data[..],
            "the referenced window must reproduce the payload exactly"
        );
        expected_offset += data_len;
    }
}

#[test]
fn test_nominal_size_byte_encoding() {
    let packed = pack_ico(&[
        IcoImage::new(vec![0; 4], 48),
        IcoImage::new(vec![0; 4], 256),
    ]);
    assert_eq!(entry(&packed, 0)[0], 48, "nominal size 48 encodes as byte 48");
    assert_eq!(entry(&packed, 0)[1], 48, "height byte matches width byte");
    assert_eq!(entry(&packed, 1)[0], 0, "nominal size 256 encodes as byte 0");
    assert_eq!(entry(&packed, 1)[1], 0, "height byte matches width byte");
}

#[test]
fn test_duplicate_nominal_sizes_are_kept() {
    // The packer is positional and payload-opaque: duplicates pass through
    // unchanged, in order.
    let packed = pack_ico(&[
        IcoImage::new(vec![0x11; 3], 32),
        IcoImage::new(vec![0x22; 3], 32),
    ]);
    assert_eq!(&packed[4..6], &2u16.to_le_bytes(), "both entries are counted");
    let first_offset = read_u32_le(&entry(&packed, 0)[12..16]) as usize;
    let second_offset = read_u32_le(&entry(&packed, 1)[12..16]) as usize;
    assert_eq!(
        &packed[first_offset..first_offset + 3],
        &[0x11; 3],
        "first duplicate keeps its payload"
    );
    assert_eq!(
        &packed[second_offset..second_offset + 3],
        &[0x22; 3],
        "second duplicate keeps its payload"
    );
}

#[test]
fn test_png_payload_three_entry_container() {
    let color = Rgb::new(139, 92, 246);
    let images = vec![
        IcoImage::new(encode_solid(16, color), 16),
        IcoImage::new(encode_solid(32, color), 32),
        IcoImage::new(encode_solid(256, color), 256),
    ];
    let packed = pack_ico(&images);

    assert_eq!(&packed[4..6], &3u16.to_le_bytes(), "three entries");
    let third = entry(&packed, 2);
    assert_eq!(third[0], 0, "256 px entry has width byte 0");
    assert_eq!(third[1], 0, "256 px entry has height byte 0");

    let offset = read_u32_le(&third[12..16]) as usize;
    assert_eq!(
        &packed[offset..offset + 8],
        &PNG_SIGNATURE,
        "the payload at the computed offset starts with the PNG signature"
    );
}
