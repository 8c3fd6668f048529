use futures::stream::{FuturesUnordered, StreamExt};

use super::prelude::*;
use crate::gateways;

/// Fetch the rating summary of a single toilet.
///
/// Missing summaries and failures both yield `None`:
/// the caller must not record anything for this toilet.
pub async fn fetch_summary<G>(gateway: &G, id: &ToiletId) -> Option<RatingSummary>
where
    G: ReviewGateway + ?Sized,
{
    match gateway.summary(id).await {
        Ok(Some(summary)) => Some(summary),
        Ok(None) | Err(gateways::Error::NotFound) => {
            log::debug!("No summary available for toilet {id}");
            None
        }
        Err(err) => {
            log::warn!("Unable to fetch summary of toilet {id}: {err}");
            None
        }
    }
}

/// Fetch the summaries of many toilets independently of each other.
///
/// `on_summary` is invoked for every available summary in the order
/// the requests complete, not in the order of `ids`.
/// Returns the number of summaries that have been delivered.
pub async fn fetch_summaries<G, I, F>(gateway: &G, ids: I, mut on_summary: F) -> usize
where
    G: ReviewGateway + ?Sized,
    I: IntoIterator<Item = ToiletId>,
    F: FnMut(ToiletId, RatingSummary),
{
    let mut pending = ids
        .into_iter()
        .map(|id| async move {
            let summary = fetch_summary(gateway, &id).await;
            (id, summary)
        })
        .collect::<FuturesUnordered<_>>();
    let mut delivered = 0;
    while let Some((id, summary)) = pending.next().await {
        if let Some(summary) = summary {
            on_summary(id, summary);
            delivered += 1;
        }
    }
    delivered
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        collections::{HashMap, VecDeque},
    };

    use async_trait::async_trait;
    use futures::channel::oneshot;

    use super::*;
    use crate::{state::SummaryStore, usecases::tests::*};

    /// Summaries that are delivered whenever the test decides.
    ///
    /// The n-th request waits for the n-th receiver.
    #[derive(Default)]
    struct ControlledBackend {
        receivers: RefCell<VecDeque<oneshot::Receiver<RatingSummary>>>,
        requests: RefCell<Vec<ToiletId>>,
    }

    impl ControlledBackend {
        fn with_requests(count: usize) -> (Self, Vec<oneshot::Sender<RatingSummary>>) {
            let backend = Self::default();
            let senders = (0..count)
                .map(|_| {
                    let (tx, rx) = oneshot::channel();
                    backend.receivers.borrow_mut().push_back(rx);
                    tx
                })
                .collect();
            (backend, senders)
        }
    }

    #[async_trait(?Send)]
    impl ReviewGateway for ControlledBackend {
        async fn summary(&self, id: &ToiletId) -> gateways::Result<Option<RatingSummary>> {
            self.requests.borrow_mut().push(id.clone());
            let rx = self
                .receivers
                .borrow_mut()
                .pop_front()
                .ok_or(gateways::Error::NotFound)?;
            rx.await
                .map(Some)
                .map_err(|_| gateways::Error::Transport("cancelled".into()))
        }

        async fn create_review(&self, _: &ReviewInput) -> gateways::Result<()> {
            unimplemented!()
        }

        async fn custom_toilets(&self) -> gateways::Result<Vec<CustomToilet>> {
            unimplemented!()
        }

        async fn create_custom_toilet(
            &self,
            _: &NewCustomToilet,
        ) -> gateways::Result<CustomToilet> {
            unimplemented!()
        }
    }

    #[test]
    fn absent_summary_is_none() {
        let backend = MockBackend::default();
        assert_eq!(block_on(fetch_summary(&backend, &ToiletId::Osm(1))), None);
    }

    #[test]
    fn failing_summary_is_none() {
        let backend = MockBackend::default();
        backend.set_summary(ToiletId::Osm(1), summary(4.0));
        backend.fail_summary(ToiletId::Osm(1));
        assert_eq!(block_on(fetch_summary(&backend, &ToiletId::Osm(1))), None);
    }

    #[test]
    fn deliver_only_available_summaries() {
        let backend = MockBackend::default();
        backend.set_summary(ToiletId::Osm(1), summary(4.0));
        backend.set_summary(ToiletId::Osm(3), summary(2.0));
        backend.set_summary(ToiletId::custom("9"), summary(5.0));
        backend.fail_summary(ToiletId::Osm(3));

        let ids = vec![
            ToiletId::Osm(1),
            ToiletId::Osm(2),
            ToiletId::Osm(3),
            ToiletId::custom("9"),
        ];
        let mut merged = HashMap::new();
        let delivered = block_on(fetch_summaries(&backend, ids.clone(), |id, s| {
            merged.insert(id, s);
        }));

        assert_eq!(delivered, 2);
        assert_eq!(merged.len(), 2);
        assert!(merged.len() <= ids.len());
        assert_eq!(merged.get(&ToiletId::Osm(1)), Some(&summary(4.0)));
        assert_eq!(merged.get(&ToiletId::custom("9")), Some(&summary(5.0)));
        assert!(!merged.contains_key(&ToiletId::Osm(2)));
        assert!(!merged.contains_key(&ToiletId::Osm(3)));
        // One independent request per toilet
        assert_eq!(backend.summary_requests().len(), ids.len());
    }

    #[test]
    fn merge_in_completion_order() {
        let ids = vec![ToiletId::Osm(1), ToiletId::Osm(2), ToiletId::Osm(1)];
        let (backend, senders) = ControlledBackend::with_requests(ids.len());
        let mut store = SummaryStore::default();
        let mut seen = vec![];

        let fetch = fetch_summaries(&backend, ids.clone(), |id, summary| {
            seen.push((id.clone(), summary));
            store.merge(id, summary);
        });
        // Answer the requests from last to first
        let respond = async move {
            for (n, tx) in senders.into_iter().enumerate().rev() {
                tx.send(summary(n as f64)).unwrap();
                yield_now().await;
            }
        };
        let (delivered, ()) = block_on(async move { futures::join!(fetch, respond) });

        assert_eq!(delivered, ids.len());
        let requests = backend.requests.borrow().clone();
        assert_eq!(requests.len(), ids.len());
        let expected: Vec<_> = requests
            .iter()
            .cloned()
            .enumerate()
            .rev()
            .map(|(n, id)| (id, summary(n as f64)))
            .collect();
        assert_eq!(seen, expected);

        // Both requests for the same toilet completed: the later one wins
        let (_, last_for_1) = seen
            .iter()
            .rev()
            .find(|(id, _)| *id == ToiletId::Osm(1))
            .unwrap();
        assert_eq!(store.get(&ToiletId::Osm(1)), Some(last_for_1));
        let first_request_for_1 = requests
            .iter()
            .position(|id| *id == ToiletId::Osm(1))
            .unwrap();
        assert_eq!(last_for_1, &summary(first_request_for_1 as f64));
    }
}
