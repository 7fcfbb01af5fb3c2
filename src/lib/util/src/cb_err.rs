/**
 * rkboot status codes
 *
 * Common status definitions that can be handed back to the platform from a
 * boot stage. All error values are negative, success is zero. Allocate a new
 * group of errors every 100 values.
 */
#[repr(i32)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CbErr {
    /// Call completed successfully
    Success = 0,

    /* Boot environment errors */
    /// Environment value was already written this boot cycle
    EnvAlreadySet = -400,

    /* Boot device errors */
    /// No candidate storage device was accepted
    BootDevNotResolved = -500,

    /* Boot method errors */
    /// Every boot method returned without handing off
    BootMethodsExhausted = -600,
    /// Boot flow was driven out of order
    BootFlowState = -601,
}

impl CbErr {
    pub const fn code(self) -> i32 {
        self as i32
    }
}
