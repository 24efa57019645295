use std::f32::consts::FRAC_PI_2;
use super::*;

fn create_test_data() -> InstanceData {
    InstanceData::from_placements(&[
        InstancePlacement { x: 1.0, y: 2.0, scale: 0.5, angle: 0.0 },
        InstancePlacement { x: -3.0, y: 4.0, scale: 1.0, angle: FRAC_PI_2 },
    ])
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_accepts_multiple_of_six() {
    let data = InstanceData::new(vec![0.0; 12]).unwrap();
    assert_eq!(data.instance_count(), 2);
    assert!(!data.is_empty());
}

#[test]
fn test_new_rejects_partial_instance() {
    let result = InstanceData::new(vec![0.0; 7]);
    assert!(matches!(result, Err(Error::InvalidInstanceData(_))));
}

#[test]
fn test_empty_data() {
    let data = InstanceData::new(Vec::new()).unwrap();
    assert_eq!(data.instance_count(), 0);
    assert!(data.is_empty());
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_from_placements_layout() {
    let data = create_test_data();

    assert_eq!(data.positions(), &[1.0, 2.0, 0.5, -3.0, 4.0, 1.0]);
    assert_eq!(data.rotation(0), [0.0, 1.0, 0.0]);

    let [sin, cos, zero] = data.rotation(1);
    assert!((sin - 1.0).abs() < 1e-6);
    assert!(cos.abs() < 1e-6);
    assert_eq!(zero, 0.0);
}

#[test]
fn test_halves_are_index_aligned() {
    let data = create_test_data();
    assert_eq!(data.positions().len(), data.rotations().len());
    assert_eq!(data.position(1), [-3.0, 4.0, 1.0]);
    assert_eq!(&data.rotations()[3..6], &data.rotation(1));
}

#[test]
fn test_copy_instance_moves_both_triplets() {
    let source = create_test_data();
    let mut target = InstanceData::zeroed(2);

    target.copy_instance(0, &source, 1);

    assert_eq!(target.position(0), source.position(1));
    assert_eq!(target.rotation(0), source.rotation(1));
    assert_eq!(target.position(1), [0.0; 3]);
}

#[test]
fn test_as_bytes_length() {
    let data = create_test_data();
    assert_eq!(data.as_bytes().len(), data.as_slice().len() * 4);
}
