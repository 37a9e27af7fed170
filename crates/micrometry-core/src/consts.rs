/// Maximum interactive zoom factor.
pub const MAX_ZOOM: f32 = 3.0;

/// Zoom floor used before any image has been fitted to a container.
/// Once fitted, the fit-to-container base zoom becomes the floor.
pub const FALLBACK_ZOOM_FLOOR: f32 = 0.5;

/// Zoom increment applied by the stepwise zoom controls.
pub const ZOOM_STEP: f32 = 0.1;

/// Gesture movement (in container pixels) beyond which a single-finger
/// drag pans the view and suppresses point capture for that gesture.
pub const DRAG_THRESHOLD_PX: f32 = 8.0;

/// Maximum number of live marked points while measuring.
pub const MAX_LIVE_POINTS: usize = 2;

/// Decimal places used when formatting measurements for display.
pub const DISPLAY_DECIMALS: usize = 2;

/// Micrometers per millimeter, for lens-derived calibration.
pub const MICROMETERS_PER_MM: f64 = 1000.0;

/// Unit symbol produced by automatic (lens) calibration.
pub const MICROMETER_UNIT: &str = "µm";

/// Field-of-view diameter (mm) visible through the 4x objective.
pub const LENS_FOV_4X_MM: f64 = 4.5;

/// Field-of-view diameter (mm) visible through the 10x objective.
pub const LENS_FOV_10X_MM: f64 = 1.8;

/// Field-of-view diameter (mm) visible through the 40x objective.
pub const LENS_FOV_40X_MM: f64 = 0.45;

/// Field-of-view diameter (mm) visible through the 100x objective.
pub const LENS_FOV_100X_MM: f64 = 0.18;
