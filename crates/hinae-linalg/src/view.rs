//! Named field access (`v.x`, `p.y`, ...) for vectors and points.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::{Point, Vector};

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

// Both `Vector` and `Point` are `#[repr(transparent)]` wrappers around `[T; N]`, which has the
// same layout as the `#[repr(C)]` view structs with `N` fields.
macro_rules! views {
    ($($ty:ident<$n:literal> => $view:ident),+ $(,)?) => {
        $(
            impl<T> Deref for $ty<T, $n> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for $ty<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

views! {
    Vector<2> => XY,
    Vector<3> => XYZ,
    Vector<4> => XYZW,
    Point<2> => XY,
    Point<3> => XYZ,
    Point<4> => XYZW,
}
