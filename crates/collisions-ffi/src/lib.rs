//! C ABI for `circuit-collide` (`libcollisions`).
//!
//! Notes
//! - Drop-in for hosts that load the collision library through a plain
//!   foreign-function loader: `f32` coordinates in, freshly allocated `int` /
//!   `float` arrays out.
//! - Every returned array must be released exactly once with `freeme`; the
//!   sector classifier returns an array of two arrays, released with
//!   `freeme_n(ptr, 2)`.
//! - Malformed counts or missing pointers return null instead of reading.
//! - Result codes: ellipse `0/1/2` (none/slow area/wall); segment and sector
//!   families `0/1` (none/wall); sector `-1` means off-track.

mod buffer;

use buffer::{input, into_raw, release, widen};
use circuit_collide::ellipse::{classify_ellipse, Annulus};
use circuit_collide::layout::{
    ellipse_codes, pair_from_slice, points_from_xy, sector_codes, segments_from_flat, wall_codes,
    LayoutError,
};
use circuit_collide::query::{collision_flags, nearest_wall_distances};
use circuit_collide::sector::{classify_sectors, TrackBoundary};
use circuit_collide::{Point2, Segment};
use std::ffi::{c_float, c_int, c_void};
use std::ptr;

/// Free one array returned by this library.
///
/// # Safety
/// `ptr` must be null or a result of this library not yet freed.
#[no_mangle]
pub unsafe extern "C" fn freeme(ptr: *mut c_void) {
    release(ptr);
}

/// Free an array of `n` arrays returned by this library, inner arrays first.
///
/// # Safety
/// `ptr` must be null or a nested result of this library with `n` entries.
#[no_mangle]
pub unsafe extern "C" fn freeme_n(ptr: *mut *mut c_void, n: c_int) {
    if ptr.is_null() {
        return;
    }
    for i in 0..usize::try_from(n).unwrap_or(0) {
        release(*ptr.add(i));
    }
    release(ptr as *mut c_void);
}

fn annulus_from(
    center: &[c_float],
    outter: &[c_float],
    inner: &[c_float],
    wall: c_float,
    slow_area: c_float,
) -> Result<Annulus, LayoutError> {
    let c = pair_from_slice(&widen(center), "center")?;
    let o = pair_from_slice(&widen(outter), "outer semi-axes")?;
    let i = pair_from_slice(&widen(inner), "inner semi-axes")?;
    Ok(Annulus::new(
        Point2::new(c.0, c.1),
        o,
        i,
        f64::from(wall),
        f64::from(slow_area),
    ))
}

/// Classify `n` points `(x[i], y[i])` against an elliptic annulus.
///
/// `center`, `outter` and `inner` point to two floats each (`[x, y]`,
/// `[semi_x, semi_y]`). Returns `n` codes: 0 none, 1 slow area, 2 wall.
///
/// # Safety
/// Every pointer must reference the number of floats stated above.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn col_circuit_ellipse(
    x: *const c_float,
    y: *const c_float,
    center: *const c_float,
    outter: *const c_float,
    inner: *const c_float,
    wall: c_float,
    slow_area: c_float,
    n: c_int,
) -> *mut c_int {
    let (Some(x), Some(y)) = (input(x, n), input(y, n)) else {
        return ptr::null_mut();
    };
    let (Some(center), Some(outter), Some(inner)) =
        (input(center, 2), input(outter, 2), input(inner, 2))
    else {
        return ptr::null_mut();
    };
    let parsed = annulus_from(center, outter, inner, wall, slow_area)
        .and_then(|ann| Ok((ann, points_from_xy(&widen(x), &widen(y))?)));
    match parsed {
        Ok((ann, pts)) => into_raw(&ellipse_codes(&classify_ellipse(&pts, &ann))),
        Err(err) => {
            tracing::warn!(%err, "col_circuit_ellipse");
            ptr::null_mut()
        }
    }
}

/// Classify `n` points against a two-rail track with `n_sectors` sectors.
///
/// Each rail array holds `n_sectors + 1` floats. Rails are in screen
/// coordinates; points must already have y negated. Returns an array of two
/// arrays of length `n`: `[sector, collision]`, sector `-1` when off-track.
///
/// # Safety
/// Point arrays hold `n` floats; rail arrays hold `n_sectors + 1` floats.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn col_circuit_custom(
    x: *const c_float,
    y: *const c_float,
    n_sectors: c_int,
    outter_x: *const c_float,
    outter_y: *const c_float,
    inner_x: *const c_float,
    inner_y: *const c_float,
    n: c_int,
) -> *mut *mut c_int {
    let Some(rail_len) = n_sectors.checked_add(1) else {
        return ptr::null_mut();
    };
    let (Some(x), Some(y)) = (input(x, n), input(y, n)) else {
        return ptr::null_mut();
    };
    let rails = (
        input(outter_x, rail_len),
        input(outter_y, rail_len),
        input(inner_x, rail_len),
        input(inner_y, rail_len),
    );
    let (Some(ox), Some(oy), Some(ix), Some(iy)) = rails else {
        return ptr::null_mut();
    };
    let built = points_from_xy(&widen(ox), &widen(oy))
        .and_then(|outer| TrackBoundary::new(outer, points_from_xy(&widen(ix), &widen(iy))?))
        .and_then(|boundary| Ok((boundary, points_from_xy(&widen(x), &widen(y))?)));
    let (boundary, pts) = match built {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(%err, "col_circuit_custom");
            return ptr::null_mut();
        }
    };
    let (sectors, cols) = sector_codes(&classify_sectors(&pts, &boundary));
    let sectors: Vec<c_int> = sectors.into_iter().map(|s| s as c_int).collect();
    let inner_bufs = [
        into_raw(&sectors) as *mut c_void,
        into_raw(&cols) as *mut c_void,
    ];
    if inner_bufs.iter().any(|p| p.is_null()) {
        inner_bufs.iter().for_each(|&p| release(p));
        return ptr::null_mut();
    }
    into_raw(&inner_bufs) as *mut *mut c_int
}

fn segment_inputs(
    segs: Option<&[c_float]>,
    walls: Option<&[c_float]>,
) -> Option<(Vec<Segment>, Vec<Segment>)> {
    let (Some(segs), Some(walls)) = (segs, walls) else {
        tracing::warn!("segment inputs missing or with a negative count");
        return None;
    };
    let parsed = segments_from_flat(&widen(segs))
        .and_then(|q| Ok((q, segments_from_flat(&widen(walls))?)));
    match parsed {
        Ok(v) => Some(v),
        Err(err) => {
            tracing::warn!(%err, "segment inputs rejected");
            None
        }
    }
}

/// For each of `n_segs` segments (4 floats each), 1 if it touches any of the
/// `n_walls` walls, else 0.
///
/// # Safety
/// `segs` holds `4 * n_segs` floats, `walls` holds `4 * n_walls` floats.
#[no_mangle]
pub unsafe extern "C" fn col_circuit(
    segs: *const c_float,
    n_segs: c_int,
    walls: *const c_float,
    n_walls: c_int,
) -> *mut c_int {
    let segs = n_segs.checked_mul(4).and_then(|n| input(segs, n));
    let walls = n_walls.checked_mul(4).and_then(|n| input(walls, n));
    match segment_inputs(segs, walls) {
        Some((q, w)) => into_raw(&wall_codes(&collision_flags(&q, &w))),
        None => ptr::null_mut(),
    }
}

/// For each of `n_segs` segments, distance from its first endpoint to the
/// nearest proper wall crossing; a very large value (`1e9`) when nothing is
/// crossed (touching a wall does not count here).
///
/// # Safety
/// Same layout as [`col_circuit`].
#[no_mangle]
pub unsafe extern "C" fn col_dist_circuit(
    segs: *const c_float,
    n_segs: c_int,
    walls: *const c_float,
    n_walls: c_int,
) -> *mut c_float {
    let segs = n_segs.checked_mul(4).and_then(|n| input(segs, n));
    let walls = n_walls.checked_mul(4).and_then(|n| input(walls, n));
    match segment_inputs(segs, walls) {
        Some((q, w)) => {
            let d: Vec<c_float> = nearest_wall_distances(&q, &w)
                .into_iter()
                .map(|v| v as c_float)
                .collect();
            into_raw(&d)
        }
        None => ptr::null_mut(),
    }
}

#[cfg(test)]
mod tests;
