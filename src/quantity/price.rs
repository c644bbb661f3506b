quantity!(
    /// Yen per kilowatt-hour.
    YenPerKilowattHour, via: f64, suffix: "円/kWh", precision: 2
);
