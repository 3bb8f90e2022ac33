//! Sniffing many inputs: a cached sequential iterator, and a worker pool for
//! blocking lookups.

use std::collections::{BTreeMap, HashMap};
use std::thread;

use crossbeam_channel::{bounded, unbounded};
use tracing::debug;

use crate::mx::LookupMx;
use crate::sniff::{SniffError, SniffResult, Sniffer};

/// Lazy iterator returned by [`bulk_sniff`].
pub struct BulkSniff<'a, R, I> {
    sniffer: &'a Sniffer<R>,
    items: I,
    cache: HashMap<String, SniffResult>,
}

/// Sniffs `items` one after the other, sharing one cache so every domain is
/// resolved at most once.
///
/// Yields exactly one entry per input. With
/// [`SniffOptions::bulk`](crate::sniff::SniffOptions::bulk) the sniffer
/// swallows DNS faults and every entry is `Ok`.
pub fn bulk_sniff<'a, R, I>(sniffer: &'a Sniffer<R>, items: I) -> BulkSniff<'a, R, I::IntoIter>
where
    R: LookupMx,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    BulkSniff {
        sniffer,
        items: items.into_iter(),
        cache: HashMap::new(),
    }
}

impl<R, I> BulkSniff<'_, R, I> {
    /// Distinct domains resolved so far.
    pub fn cached_domains(&self) -> usize {
        self.cache.len()
    }
}

impl<R, I> Iterator for BulkSniff<'_, R, I>
where
    R: LookupMx,
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<SniffResult, SniffError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.next()?;
        Some(self.sniffer.sniff_cached(item.as_ref(), &mut self.cache))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

/// Worker pool settings for [`fan_out`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolOptions {
    /// Number of worker threads; `0` is treated as `1`.
    pub workers: usize,
    /// Deliver results in submission order instead of completion order.
    pub preserve_order: bool,
}

impl PoolOptions {
    pub const DEFAULT_WORKERS: usize = 10;

    pub fn sequential() -> Self {
        Self {
            workers: 1,
            preserve_order: true,
        }
    }
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            workers: Self::DEFAULT_WORKERS,
            preserve_order: false,
        }
    }
}

/// Runs `task` over `inputs` on a bounded pool of scoped threads.
///
/// Each worker builds its own state with `init(worker_id)` (typically its
/// own resolver) and processes one input at a time. `sink` runs on the
/// calling thread and receives `(input_index, output)` pairs as they
/// complete, or in input order when `options.preserve_order` is set.
/// Returns the number of inputs processed.
pub fn fan_out<I, T, S, R, Init, Task, Sink>(
    inputs: I,
    options: &PoolOptions,
    init: Init,
    task: Task,
    mut sink: Sink,
) -> usize
where
    I: IntoIterator<Item = T>,
    I::IntoIter: Send,
    T: Send,
    R: Send,
    Init: Fn(usize) -> S + Sync,
    Task: Fn(&mut S, T) -> R + Sync,
    Sink: FnMut(usize, R),
{
    let workers = options.workers.max(1);
    let (work_tx, work_rx) = bounded::<(usize, T)>(workers * 4);
    let (result_tx, result_rx) = unbounded::<(usize, R)>();
    let inputs = inputs.into_iter();

    thread::scope(|scope| {
        for worker_id in 0..workers {
            let work_rx = work_rx.clone();
            let result_tx = result_tx.clone();
            let init = &init;
            let task = &task;
            scope.spawn(move || {
                let mut state = init(worker_id);
                for (index, item) in work_rx {
                    let output = task(&mut state, item);
                    if result_tx.send((index, output)).is_err() {
                        break;
                    }
                }
                debug!(worker_id, "worker done");
            });
        }
        // les workers détiennent leurs propres copies
        drop(work_rx);
        drop(result_tx);

        scope.spawn(move || {
            for entry in inputs.enumerate() {
                if work_tx.send(entry).is_err() {
                    break;
                }
            }
        });

        let mut delivered = 0;
        let mut pending = BTreeMap::new();
        for (index, output) in result_rx {
            if !options.preserve_order {
                sink(index, output);
                delivered += 1;
                continue;
            }
            pending.insert(index, output);
            while let Some(output) = pending.remove(&delivered) {
                sink(delivered, output);
                delivered += 1;
            }
        }
        delivered
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::mx::tests::{StubAnswer, StubResolver};
    use crate::sniff::{NO_MX, SniffOptions};

    #[test]
    fn bulk_sniff_resolves_each_domain_once() {
        let stub = StubResolver::new()
            .with_records("example.com", &[(10, "aspmx.l.google.com.")])
            .with_records("example.org", &[(10, "mail.example.org.")]);
        let sniffer = Sniffer::with_resolver(stub, SniffOptions::bulk());

        let mut iter = bulk_sniff(
            &sniffer,
            ["a@example.com", "b@example.com", "example.org", "https://www.example.com/"],
        );
        let results: Vec<SniffResult> = iter.by_ref().map(|r| r.expect("ok")).collect();

        assert_eq!(iter.cached_domains(), 2);
        assert_eq!(sniffer.resolver().queries(), 2);
        let queries: Vec<&str> = results.iter().map(|r| r.query.as_str()).collect();
        assert_eq!(
            queries,
            ["a@example.com", "b@example.com", "example.org", "https://www.example.com/"]
        );
        assert_eq!(results[3].matches, vec!["google-apps"]);
        assert_eq!(results[2].matches, vec!["self"]);
    }

    #[test]
    fn bulk_sniff_keeps_one_entry_per_input_on_dns_faults() {
        let stub = StubResolver::new().with("broken.example", StubAnswer::Timeout);
        let sniffer = Sniffer::with_resolver(stub, SniffOptions::bulk());

        let results: Vec<_> = bulk_sniff(&sniffer, vec!["broken.example".to_string()]).collect();
        assert_eq!(results.len(), 1);
        let result = results[0].as_ref().expect("fault swallowed");
        assert_eq!(result.matches, vec![NO_MX]);
    }

    #[test]
    fn bulk_sniff_surfaces_faults_when_strict() {
        let stub = StubResolver::new().with("broken.example", StubAnswer::Timeout);
        let sniffer = Sniffer::with_resolver(stub, SniffOptions::default());

        let mut iter = bulk_sniff(&sniffer, ["broken.example", "example.net"]);
        assert!(iter.next().expect("first entry").is_err());
        assert!(iter.next().expect("second entry").is_ok());
        assert!(iter.next().is_none());
    }

    #[test]
    fn fan_out_preserves_order_on_request() {
        let options = PoolOptions {
            workers: 4,
            preserve_order: true,
        };
        let mut seen = Vec::new();
        let count = fan_out(
            (0..50u64).collect::<Vec<_>>(),
            &options,
            |_| (),
            |_, n| {
                // inverse l'ordre d'achèvement
                thread::sleep(Duration::from_millis((50 - n) % 7));
                n * 2
            },
            |index, output| seen.push((index, output)),
        );

        assert_eq!(count, 50);
        let expected: Vec<(usize, u64)> = (0..50u64).map(|n| (n as usize, n * 2)).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn fan_out_delivers_every_result() {
        let inits = AtomicUsize::new(0);
        let mut seen = Vec::new();
        let count = fan_out(
            vec!["a", "b", "c", "d", "e"],
            &PoolOptions::default(),
            |_| {
                inits.fetch_add(1, Ordering::SeqCst);
                0usize
            },
            |calls, item| {
                *calls += 1;
                item.to_uppercase()
            },
            |index, output| seen.push((index, output)),
        );

        assert_eq!(count, 5);
        assert_eq!(inits.load(Ordering::SeqCst), PoolOptions::DEFAULT_WORKERS);
        seen.sort();
        let outputs: Vec<&str> = seen.iter().map(|(_, s)| s.as_str()).collect();
        assert_eq!(outputs, ["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn fan_out_with_zero_workers_still_runs() {
        let options = PoolOptions {
            workers: 0,
            preserve_order: false,
        };
        let count = fan_out(vec![1, 2, 3], &options, |_| (), |_, n| n, |_, _| {});
        assert_eq!(count, 3);
    }

    #[test]
    fn fan_out_sniffs_with_shared_stub() {
        let stub = StubResolver::new()
            .with_records("example.com", &[(10, "aspmx.l.google.com.")])
            .with_records("example.net", &[(10, "mx.hoster.test.")]);
        let mut results = Vec::new();
        fan_out(
            vec!["example.com", "example.net", "example.org"],
            &PoolOptions::sequential(),
            |_| Sniffer::with_resolver(&stub, SniffOptions::default()),
            |sniffer, query| sniffer.sniff(query),
            |_, result| results.push(result.expect("stub never fails")),
        );

        let matches: Vec<&str> = results.iter().filter_map(|r| r.primary()).collect();
        assert_eq!(matches, ["google-apps", "unknown", "nomx"]);
        assert_eq!(stub.queries(), 3);
    }
}
