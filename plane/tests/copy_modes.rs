use bytemuck::{Pod, Zeroable};
use image_plane::{
    AdvancedCopyMode, CopyMode, DeepCopy, Plane, PlaneError, PlaneSource, PlaneSpec,
};

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

fn padded_memory(spec: PlaneSpec) -> Vec<u8> {
    let size = spec.byte_layout().unwrap().size;
    (0..size).map(|i| (i * 7 + 1) as u8).collect()
}

#[test]
fn referencing_caller_memory() {
    let spec = PlaneSpec::of::<u8>(3, 4, 2).with_padding(2);
    let memory = padded_memory(spec);

    let plane = Plane::from_memory(spec, PlaneSource::Shared(&memory), CopyMode::UseKeepLayout)
        .unwrap();
    assert!(plane.is_read_only() && !plane.is_owner());
    assert_eq!(plane.memory_range().unwrap().start, memory.as_ptr() as usize);
    assert_eq!(plane.stride_bytes(), 8);
    assert_eq!(plane.row_bytes(1).unwrap(), &memory[8..14]);
}

#[test]
fn writing_through_exclusive_memory() {
    let spec = PlaneSpec::of::<u16>(2, 2, 1);
    let mut memory = vec![0u8; 8];

    {
        let mut plane = Plane::from_memory(
            spec,
            PlaneSource::Exclusive(&mut memory),
            CopyMode::UseKeepLayout,
        )
        .unwrap();
        assert!(!plane.is_read_only());
        plane.pixel_mut::<u16>(1, 1).unwrap()[0] = 0x0102;
    }

    assert_eq!(u16::from_ne_bytes([memory[6], memory[7]]), 0x0102);
}

#[test]
fn copy_with_padding_data_is_byte_identical() {
    let spec = PlaneSpec::of::<u8>(5, 3, 3).with_padding(3);
    let memory = padded_memory(spec);

    let plane = Plane::from_memory(
        spec,
        PlaneSource::Shared(&memory),
        CopyMode::CopyKeepLayoutCopyPaddingData,
    )
    .unwrap();

    assert!(plane.is_owner());
    assert_eq!(plane.padding_elements(), 3);
    assert_eq!(plane.as_bytes(), &memory[..]);
}

#[test]
fn copy_without_padding_data_zeroes_padding() {
    let spec = PlaneSpec::of::<u8>(2, 2, 1).with_padding(2);
    let memory = [1, 2, 9, 9, 3, 4, 9, 9];

    let plane = Plane::from_memory(
        spec,
        PlaneSource::Shared(&memory),
        CopyMode::CopyKeepLayoutDoNotCopyPaddingData,
    )
    .unwrap();
    assert_eq!(plane.as_bytes(), &[1, 2, 0, 0, 3, 4, 0, 0]);

    let plane = Plane::from_memory(
        spec,
        PlaneSource::Shared(&memory),
        CopyMode::CopyRemovePaddingLayout,
    )
    .unwrap();
    assert!(plane.is_continuous());
    assert_eq!(plane.as_bytes(), &[1, 2, 3, 4]);
}

#[test]
fn last_row_padding_may_be_missing() {
    let spec = PlaneSpec::of::<u8>(2, 2, 1).with_padding(2);
    let memory = [1, 2, 0, 0, 3, 4];

    let plane = Plane::with_data(spec, &memory).unwrap();
    assert_eq!(plane.row_bytes(1).unwrap(), &[3, 4]);

    assert!(matches!(
        Plane::with_data(spec, &memory[..5]),
        Err(PlaneError::BufferTooSmall {
            required: 6,
            actual: 5
        })
    ));
}

#[test]
fn use_or_copy_depends_on_ownership() {
    let spec = PlaneSpec::of::<u8>(4, 2, 1).with_padding(1);
    let owner = Plane::new(spec).unwrap();

    let copy = Plane::from_plane(&owner, AdvancedCopyMode::UseOrCopy).unwrap();
    assert!(copy.is_owner() && copy.is_continuous());

    let keep = Plane::from_plane(&owner, AdvancedCopyMode::UseOrCopyKeepLayout).unwrap();
    assert!(keep.is_owner());
    assert_eq!(keep.padding_elements(), 1);

    let view = owner.alias();
    let alias = Plane::from_plane(&view, AdvancedCopyMode::UseOrCopy).unwrap();
    assert!(alias.is_read_only());
    assert_eq!(alias.memory_range(), owner.memory_range());
}

#[test]
fn copy_from_reuses_memory_of_equal_size() {
    let source = Plane::new(PlaneSpec::of::<u8>(4, 4, 1)).unwrap();
    let mut target = Plane::new(PlaneSpec::of::<u8>(2, 8, 1)).unwrap();
    let before = target.memory_range();

    target.copy_from(&source, DeepCopy::RemovePadding, false).unwrap();
    assert_eq!(target.memory_range(), before);
    assert_eq!(target.width(), 4);

    let larger = Plane::new(PlaneSpec::of::<u8>(8, 4, 1)).unwrap();
    assert!(matches!(
        target.copy_from(&larger, DeepCopy::RemovePadding, false),
        Err(PlaneError::ReallocationRequired)
    ));
    assert_eq!(target.width(), 4);
    assert_eq!(target.memory_range(), before);

    target.copy_from(&larger, DeepCopy::RemovePadding, true).unwrap();
    assert_eq!(target.size(), 32);
}

#[test]
fn copy_of_invalid_source_releases() {
    let invalid = Plane::default();
    let mut target = Plane::new(PlaneSpec::of::<u8>(2, 2, 1)).unwrap();
    target.copy(&invalid, AdvancedCopyMode::UseOrCopy, true).unwrap();
    assert!(!target.is_valid());
}

#[test]
fn sub_plane_writes_reach_parent() {
    let mut plane = Plane::new(PlaneSpec::of::<u8>(4, 4, 1)).unwrap();

    {
        let mut view = plane.sub_plane_mut(1, 2, 2, 2).unwrap();
        assert_eq!(view.padding_elements(), 2);
        view.fill(5, true).unwrap();
    }

    assert_eq!(plane.row_bytes(1).unwrap(), &[0, 0, 0, 0]);
    assert_eq!(plane.row_bytes(2).unwrap(), &[0, 5, 5, 0]);
    assert_eq!(plane.row_bytes(3).unwrap(), &[0, 5, 5, 0]);
}

#[test]
fn typed_pixels() {
    let mut plane = Plane::new(PlaneSpec::of::<u8>(2, 2, 3).with_padding(1)).unwrap();
    plane.row_mut::<Rgb>(1).unwrap()[1] = Rgb { r: 1, g: 2, b: 3 };

    assert_eq!(plane.pixel::<Rgb>(1, 1).unwrap(), &[Rgb { r: 1, g: 2, b: 3 }]);
    assert_eq!(plane.pixel::<u8>(1, 1).unwrap(), &[1, 2, 3]);
    assert_eq!(plane.row_bytes(1).unwrap(), &[0, 0, 0, 1, 2, 3]);
    assert!(matches!(plane.row::<u32>(0), Err(PlaneError::Cast(_))));
}

#[test]
fn copy_in_use_mode_aliases_owned_plane() {
    let mut source = Plane::new(PlaneSpec::of::<u8>(3, 2, 1).with_padding(2)).unwrap();
    source.fill(5, true).unwrap();

    let mut target = Plane::new(PlaneSpec::of::<u8>(1, 1, 1)).unwrap();
    target.copy(&source, AdvancedCopyMode::UseKeepLayout, false).unwrap();

    assert!(target.is_read_only() && !target.is_owner());
    assert_eq!(target.memory_range(), source.memory_range());
    assert_eq!(target.stride_bytes(), 5);
    assert_eq!(target.padding_elements(), 2);
    assert_eq!(target.row_bytes(1).unwrap(), &[5, 5, 5]);
}

#[test]
fn filling_typed_pixels() {
    let mut plane = Plane::new(PlaneSpec::of::<u16>(2, 2, 2).with_padding(1)).unwrap();
    plane.fill_pixels::<u16>(&[7, 300]).unwrap();

    assert_eq!(plane.pixel::<u16>(1, 1).unwrap(), &[7, 300]);
    assert_eq!(plane.row::<u16>(0).unwrap(), &[7, 300, 7, 300]);
    assert!(plane.as_bytes()[8..10].iter().all(|&byte| byte == 0));

    assert!(matches!(
        plane.fill_pixels::<u16>(&[7]),
        Err(PlaneError::PixelValue { channels: 2, element_size: 2 })
    ));
    assert!(matches!(
        plane.fill_pixels::<u8>(&[7, 3]),
        Err(PlaneError::PixelValue { .. })
    ));

    let memory = vec![0u8; 16];
    let mut shared = Plane::with_data(PlaneSpec::of::<u16>(2, 2, 2), &memory).unwrap();
    assert!(matches!(shared.fill_pixels::<u16>(&[1, 2]), Err(PlaneError::ReadOnly)));
}

#[test]
fn searching_pixels_in_unaligned_memory() {
    let spec = PlaneSpec::of::<u16>(2, 2, 1).with_padding(1);
    let values: [u16; 6] = [1, 2, 0xFFFF, 3, 4, 0xFFFF];

    let mut memory = vec![0u8];
    for value in values {
        memory.extend_from_slice(&value.to_ne_bytes());
    }

    let plane = Plane::with_data(spec, &memory[1..]).unwrap();
    assert!(plane.contains_pixel::<u16>(&[4]).unwrap());
    assert!(!plane.contains_pixel::<u16>(&[0xFFFF]).unwrap());
    assert!(matches!(
        plane.contains_pixel::<u8>(&[4]),
        Err(PlaneError::PixelValue { .. })
    ));
    assert!(matches!(
        Plane::default().contains_pixel::<u16>(&[4]),
        Err(PlaneError::InvalidLayout)
    ));
}
