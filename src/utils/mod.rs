pub(crate) mod logging;
pub(crate) mod timezone;

pub(crate) use logging::init_logging;
pub(crate) use timezone::Timezone;
