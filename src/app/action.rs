/// Actions reachable from an element's action name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SimulateDeposit,
    FocusPoint,
    OpenPoint,
    RedeemProduct,
}

impl Action {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "simulateDeposit" => Some(Self::SimulateDeposit),
            "focus-point" => Some(Self::FocusPoint),
            "open-point" => Some(Self::OpenPoint),
            "redeem-product" => Some(Self::RedeemProduct),
            _ => None,
        }
    }
}

/// Auth form types, read from a form's auth-form attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthForm {
    Login,
    Signup,
}

impl AuthForm {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "login" => Some(Self::Login),
            "signup" => Some(Self::Signup),
            _ => None,
        }
    }
}
