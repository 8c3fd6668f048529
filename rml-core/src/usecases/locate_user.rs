use super::prelude::*;

/// The current position of the user or `default` if it is unknown.
pub async fn locate_user<L>(locator: &L, default: MapPoint) -> MapPoint
where
    L: GeoLocator + ?Sized,
{
    match locator.current_position().await {
        Ok(pos) if pos.is_valid() => pos,
        Ok(pos) => {
            log::warn!("Ignoring invalid device position {pos}");
            default
        }
        Err(err) => {
            log::warn!("Device position unavailable: {err}");
            default
        }
    }
}
