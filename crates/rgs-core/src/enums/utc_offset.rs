//! Civil time zones patients may live in, keyed by UTC offset in minutes.

reference_enum! {
    /// Supported UTC offsets (Russian civil time zones).
    pub enum UtcOffset: i32 {
        /// MSK-1, +02:00
        Kaliningrad = 120,
        /// MSK, +03:00
        Moscow = 180,
        /// MSK+1, +04:00
        Samara = 240,
        /// MSK+2, +05:00
        Yekaterinburg = 300,
        /// MSK+3, +06:00
        Omsk = 360,
        /// MSK+4, +07:00
        Krasnoyarsk = 420,
        /// MSK+5, +08:00
        Irkutsk = 480,
        /// MSK+6, +09:00
        Yakutsk = 540,
        /// MSK+7, +10:00
        Vladivostok = 600,
        /// MSK+8, +11:00
        Magadan = 660,
        /// MSK+9, +12:00
        Kamchatka = 720,
    }
}
