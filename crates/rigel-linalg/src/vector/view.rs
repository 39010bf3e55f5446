//! Named coordinate access (`v.x`, `v.y`, ...) for vectors with up to 4 elements.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

macro_rules! coord_views {
    ($($name:ident [$n:literal] { $($field:ident),+ })+) => {
        $(
            #[repr(C)]
            pub struct $name<T> {
                $( pub $field: T, )+
                _priv: (), // prevent external construction
            }

            impl<T> Deref for Vector<T, $n> {
                type Target = $name<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Safety: `$name<T>` is `repr(C)` with `$n` fields of type `T` followed by a
                    // ZST, so it has the same layout as `[T; $n]`.
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // Safety: see `deref`.
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

coord_views! {
    X [1] { x }
    XY [2] { x, y }
    XYZ [3] { x, y, z }
    XYZW [4] { x, y, z, w }
}
