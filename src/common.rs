pub mod characteristics {
    use uuid::Uuid;

    /// On/off state, one byte.
    pub const LIGHT: Uuid = Uuid::from_u128(0x932c32bd_0002_47a2_835a_a8d455b859dd);
    /// Brightness, one unsigned byte.
    pub const BRIGHTNESS: Uuid = Uuid::from_u128(0x932c32bd_0003_47a2_835a_a8d455b859dd);
    pub const TEMPERATURE: Uuid = Uuid::from_u128(0x932c32bd_0004_47a2_835a_a8d455b859dd);
}
