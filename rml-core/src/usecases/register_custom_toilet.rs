use super::prelude::*;

/// Register a new toilet at the chosen position.
///
/// A missing or blank name cancels the registration
/// without contacting the backend.
pub async fn register_custom_toilet<G>(
    gateway: &G,
    name: Option<&str>,
    pos: MapPoint,
) -> Result<CustomToilet>
where
    G: ReviewGateway + ?Sized,
{
    let name = name.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(Error::EmptyToiletName);
    }
    if !pos.is_valid() {
        return Err(Error::InvalidPosition);
    }
    let new_toilet = NewCustomToilet {
        name: name.to_owned(),
        pos,
    };
    let created = gateway.create_custom_toilet(&new_toilet).await?;
    log::info!("Registered custom toilet {} '{}'", created.id, created.name);
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::{load_custom_toilets, tests::*};

    fn pos() -> MapPoint {
        MapPoint::from_lat_lng_deg(51.5, -0.1)
    }

    #[test]
    fn cancelled_or_blank_name_makes_no_request() {
        let backend = MockBackend::default();
        for name in [None, Some(""), Some("   ")] {
            let res = block_on(register_custom_toilet(&backend, name, pos()));
            assert_eq!(res, Err(Error::EmptyToiletName));
        }
        assert!(backend.calls.borrow().is_empty());
    }

    #[test]
    fn create_with_trimmed_name() {
        let backend = MockBackend::default();
        let created = block_on(register_custom_toilet(&backend, Some(" Café "), pos())).unwrap();
        assert_eq!(created.name, "Café");
        assert_eq!(created.pos, pos());
        assert_eq!(created.toilet_id(), ToiletId::custom("1"));
        assert_eq!(
            backend.calls.borrow().as_slice(),
            &[Call::CreateCustomToilet(NewCustomToilet {
                name: "Café".into(),
                pos: pos(),
            })]
        );
    }

    #[test]
    fn registered_toilet_is_listed_afterwards() {
        let backend = MockBackend::default();
        let created = block_on(register_custom_toilet(&backend, Some("Station"), pos())).unwrap();
        let listed = block_on(load_custom_toilets(&backend)).unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[test]
    fn surface_backend_failure() {
        let backend = MockBackend::default();
        backend.reject_writes();
        let err = block_on(register_custom_toilet(&backend, Some("Station"), pos())).unwrap_err();
        assert!(matches!(
            err,
            Error::Gateway(gateways::Error::Rejected { status: 500, .. })
        ));
        assert!(backend.stored_custom_toilets().is_empty());
    }
}
