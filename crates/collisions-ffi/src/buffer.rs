//! Result buffers handed across the C boundary.
//!
//! Every buffer carries a small header with its payload size, so a single
//! `release(ptr)` can rebuild the exact allocation layout without the caller
//! passing the length back.

use std::alloc::{alloc, dealloc, Layout};
use std::ffi::{c_int, c_void};
use std::mem::{align_of, size_of_val};
use std::ptr;

const ALIGN: usize = 8;
const HEADER: usize = 8;

fn layout_for(bytes: usize) -> Option<Layout> {
    Layout::from_size_align(HEADER.checked_add(bytes)?, ALIGN).ok()
}

/// Copy `data` into a fresh buffer owned by the caller. Null on allocation failure.
pub fn into_raw<T: Copy>(data: &[T]) -> *mut T {
    debug_assert!(align_of::<T>() <= ALIGN);
    let bytes = size_of_val(data);
    let Some(layout) = layout_for(bytes) else {
        return ptr::null_mut();
    };
    // SAFETY: layout is non-zero sized (header); payload starts HEADER bytes in,
    // which keeps ALIGN alignment, and has room for `data.len()` values.
    unsafe {
        let base = alloc(layout);
        if base.is_null() {
            return ptr::null_mut();
        }
        (base as *mut usize).write(bytes);
        let payload = base.add(HEADER) as *mut T;
        ptr::copy_nonoverlapping(data.as_ptr(), payload, data.len());
        payload
    }
}

/// Free a buffer returned by [`into_raw`]. Null is ignored.
///
/// # Safety
/// `payload` must come from `into_raw` and not have been released before.
pub unsafe fn release(payload: *mut c_void) {
    if payload.is_null() {
        return;
    }
    let base = (payload as *mut u8).sub(HEADER);
    let bytes = (base as *const usize).read();
    dealloc(base, Layout::from_size_align_unchecked(HEADER + bytes, ALIGN));
}

/// Borrow `n` values at `ptr`. A null pointer with `n == 0` is an empty array;
/// a negative count or a null pointer with `n > 0` is rejected.
///
/// # Safety
/// When non-null, `ptr` must point to at least `n` readable values that stay
/// valid for `'a`.
pub unsafe fn input<'a, T>(ptr: *const T, n: c_int) -> Option<&'a [T]> {
    let n = usize::try_from(n).ok()?;
    if n == 0 {
        return Some(&[]);
    }
    if ptr.is_null() {
        return None;
    }
    Some(std::slice::from_raw_parts(ptr, n))
}

pub fn widen(values: &[f32]) -> Vec<f64> {
    values.iter().map(|&v| f64::from(v)).collect()
}
