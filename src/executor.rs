/*
 * Copyright © 2020-present Peter M. Stahl pemistahl@gmail.com
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either expressed or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use rayon::prelude::*;
use rayon::ThreadPool;
use std::sync::Arc;

/// The strategy used to fan per-language scoring tasks out across
/// threads.
///
/// Results always come back in input order, independent of how the
/// tasks were scheduled, so every strategy produces the same output
/// for the same input. The built-in strategy uses rayon's global
/// thread pool; a caller-supplied pool is installed for the duration
/// of the fan-out instead.
#[derive(Clone)]
pub(crate) enum ScoringExecutor {
    Sequential,
    Builtin,
    Pool(Arc<ThreadPool>),
}

impl ScoringExecutor {
    pub(crate) fn map_collect<T, R, F>(&self, items: &[T], map_item: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Send + Sync,
    {
        match self {
            ScoringExecutor::Sequential => items.iter().map(map_item).collect(),
            ScoringExecutor::Builtin => items.par_iter().map(map_item).collect(),
            ScoringExecutor::Pool(pool) => {
                pool.install(|| items.par_iter().map(map_item).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::ThreadPoolBuilder;

    fn squares_of_first_hundred(executor: &ScoringExecutor) -> Vec<u64> {
        let items = (0..100u64).collect::<Vec<_>>();
        executor.map_collect(&items, |&item| item * item)
    }

    #[test]
    fn assert_all_strategies_preserve_input_order() {
        let sequential = squares_of_first_hundred(&ScoringExecutor::Sequential);
        let builtin = squares_of_first_hundred(&ScoringExecutor::Builtin);

        let single_threaded_pool = Arc::new(ThreadPoolBuilder::new().num_threads(1).build().unwrap());
        let single_threaded =
            squares_of_first_hundred(&ScoringExecutor::Pool(single_threaded_pool));

        let multi_threaded_pool = Arc::new(ThreadPoolBuilder::new().num_threads(4).build().unwrap());
        let multi_threaded = squares_of_first_hundred(&ScoringExecutor::Pool(multi_threaded_pool));

        assert_eq!(sequential, builtin);
        assert_eq!(sequential, single_threaded);
        assert_eq!(sequential, multi_threaded);
    }
}
