use super::*;

/// Copy `n` values out of a returned buffer and free it.
unsafe fn take<T: Copy>(ptr: *mut T, n: usize) -> Vec<T> {
    assert!(!ptr.is_null());
    let out = std::slice::from_raw_parts(ptr, n).to_vec();
    freeme(ptr as *mut c_void);
    out
}

#[test]
fn ellipse_codes_cross_the_boundary() {
    let x = [0.0f32, 9.5, 5.5, 7.0];
    let y = [0.0f32; 4];
    let center = [0.0f32, 0.0];
    let outter = [10.0f32, 10.0];
    let inner = [5.0f32, 5.0];
    let codes = unsafe {
        let p = col_circuit_ellipse(
            x.as_ptr(),
            y.as_ptr(),
            center.as_ptr(),
            outter.as_ptr(),
            inner.as_ptr(),
            1.0,
            1.0,
            4,
        );
        take(p, 4)
    };
    assert_eq!(codes, vec![2, 2, 1, 0]);
}

#[test]
fn ellipse_rejects_negative_count() {
    let v = [0.0f32; 2];
    let p = unsafe {
        col_circuit_ellipse(
            v.as_ptr(),
            v.as_ptr(),
            v.as_ptr(),
            v.as_ptr(),
            v.as_ptr(),
            0.0,
            0.0,
            -1,
        )
    };
    assert!(p.is_null());
}

#[test]
fn wall_flags_and_distances() {
    let walls = [0.0f32, 0.0, 0.0, 10.0];
    let segs = [-1.0f32, 5.0, 1.0, 5.0, 5.0, 5.0, 6.0, 5.0];
    let (flags, dists) = unsafe {
        (
            take(col_circuit(segs.as_ptr(), 2, walls.as_ptr(), 1), 2),
            take(col_dist_circuit(segs.as_ptr(), 2, walls.as_ptr(), 1), 2),
        )
    };
    assert_eq!(flags, vec![1, 0]);
    assert!((dists[0] - 1.0).abs() < 1e-6);
    assert_eq!(dists[1], 1e9);
}

#[test]
fn touching_segment_is_flagged_without_distance() {
    let walls = [0.0f32, 0.0, 0.0, 10.0];
    let segs = [-3.0f32, 5.0, 0.0, 5.0];
    let (flags, dists) = unsafe {
        (
            take(col_circuit(segs.as_ptr(), 1, walls.as_ptr(), 1), 1),
            take(col_dist_circuit(segs.as_ptr(), 1, walls.as_ptr(), 1), 1),
        )
    };
    assert_eq!(flags, vec![1]);
    assert_eq!(dists, vec![1e9]);
}

#[test]
fn empty_inputs_give_empty_results() {
    let flags = unsafe { col_circuit(ptr::null(), 0, ptr::null(), 0) };
    assert!(!flags.is_null());
    unsafe { freeme(flags as *mut c_void) };

    let segs = [0.0f32, 0.0, 1.0, 1.0];
    let dists = unsafe { take(col_dist_circuit(segs.as_ptr(), 1, ptr::null(), 0), 1) };
    assert_eq!(dists, vec![1e9]);
}

#[test]
fn segment_queries_reject_bad_counts() {
    let segs = [0.0f32; 4];
    unsafe {
        assert!(col_circuit(segs.as_ptr(), -1, segs.as_ptr(), 1).is_null());
        assert!(col_dist_circuit(segs.as_ptr(), 1, ptr::null(), 1).is_null());
    }
}

#[test]
fn custom_track_returns_sector_and_collision_arrays() {
    // square ring, screen coordinates, closed rails
    let ox = [0.0f32, 10.0, 10.0, 0.0, 0.0];
    let oy = [0.0f32, 0.0, 10.0, 10.0, 0.0];
    let ix = [3.0f32, 7.0, 7.0, 3.0, 3.0];
    let iy = [3.0f32, 3.0, 7.0, 7.0, 3.0];
    // lane centers of sides 0 and 1 with y negated, then the infield
    let x = [5.0f32, 8.5, 5.0];
    let y = [-1.5f32, -5.0, -5.0];
    unsafe {
        let out = col_circuit_custom(
            x.as_ptr(),
            y.as_ptr(),
            4,
            ox.as_ptr(),
            oy.as_ptr(),
            ix.as_ptr(),
            iy.as_ptr(),
            3,
        );
        assert!(!out.is_null());
        let sectors = std::slice::from_raw_parts(*out, 3).to_vec();
        let cols = std::slice::from_raw_parts(*out.add(1), 3).to_vec();
        freeme_n(out as *mut *mut c_void, 2);
        assert_eq!(sectors, vec![0, 1, -1]);
        assert_eq!(cols, vec![0, 0, 1]);
    }
}

#[test]
fn custom_track_rejects_short_rails() {
    let rail = [0.0f32];
    let x = [0.0f32];
    let p = unsafe {
        col_circuit_custom(
            x.as_ptr(),
            x.as_ptr(),
            0,
            rail.as_ptr(),
            rail.as_ptr(),
            rail.as_ptr(),
            rail.as_ptr(),
            1,
        )
    };
    assert!(p.is_null());
}

#[test]
fn freeing_null_is_a_no_op() {
    unsafe {
        freeme(ptr::null_mut());
        freeme_n(ptr::null_mut(), 2);
    }
}
