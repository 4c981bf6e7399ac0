use crate::errors::CapacityErrors;
use crate::performance::PerformanceTable;

/// Reference performance of an Electron-class small launcher to circular orbits.
pub struct Electron;

impl Electron {
    /// Circular-orbit altitudes (km), strictly ascending.
    pub const ALTITUDES_KM: [f64; 17] = [
        400.0, 450.0, 500.0, 550.0, 600.0, 650.0, 700.0, 750.0, 800.0, 850.0, 900.0, 950.0,
        1000.0, 1050.0, 1100.0, 1150.0, 1200.0,
    ];

    pub const PAYLOAD_40_DEG_KG: [f64; 17] = [
        270.0, 266.6, 263.8, 259.9, 257.4, 254.0, 251.3, 247.0, 243.3, 239.3, 235.7, 231.9, 228.3,
        224.5, 221.0, 217.4, 214.0,
    ];

    pub const PAYLOAD_60_DEG_KG: [f64; 17] = [
        249.0, 245.9, 243.0, 240.0, 234.2, 232.4, 230.7, 227.7, 224.4, 220.8, 217.7, 214.4, 211.4,
        207.5, 204.2, 199.7, 197.3,
    ];

    pub const PAYLOAD_80_DEG_KG: [f64; 17] = [
        224.4, 221.2, 218.7, 216.1, 213.7, 210.4, 208.0, 204.4, 201.7, 197.9, 194.8, 191.3, 188.4,
        184.9, 181.7, 178.3, 175.7,
    ];

    // Typical sun-synchronous inclination
    pub const PAYLOAD_100_DEG_KG: [f64; 17] = [
        203.7, 200.8, 198.4, 195.3, 192.9, 189.5, 187.0, 183.4, 180.3, 177.0, 174.1, 170.7, 168.0,
        164.4, 161.6, 158.5, 155.6,
    ];

    /// (inclination in degrees, payload curve) pairs.
    pub fn curves() -> [(f64, [f64; 17]); 4] {
        [
            (40.0, Self::PAYLOAD_40_DEG_KG),
            (60.0, Self::PAYLOAD_60_DEG_KG),
            (80.0, Self::PAYLOAD_80_DEG_KG),
            (100.0, Self::PAYLOAD_100_DEG_KG),
        ]
    }

    pub fn performance_table() -> Result<PerformanceTable, CapacityErrors> {
        PerformanceTable::new(
            Self::ALTITUDES_KM.to_vec(),
            Self::curves()
                .into_iter()
                .map(|(inc, payload)| (inc, payload.to_vec())),
        )
    }
}
