/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 10.0; // units per tick

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 8.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply horizontal speed on paddle hit
    pub const BALL_DEFLECTION: f32 = 0.4; // vy per unit of offset from paddle center
    pub const SERVE_MAX_VY: f32 = 7.0;

    // Score
    pub const WIN_SCORE: u8 = 3;

    // AI
    pub const PREDICTION_MAX_REFLECTIONS: u32 = 64;

    // Victory animation
    pub const CONFETTI_COUNT: usize = 100;
}
