//! 유사도 계산 메모이제이션 캐시
//!
//! 사전 퍼지 매칭 중 반복되는 비교를 줄이기 위한 캐시입니다.
//! 같은 키에 대한 계산 결과는 항상 같으므로, 동시에 여러 호출자가 같은 값을
//! 덮어써도 결과가 달라지지 않습니다 (check-then-insert).

use std::collections::HashMap;

use parking_lot::RwLock;

/// 기본 최대 항목 수. 넘으면 전체를 비움
const DEFAULT_CAPACITY: usize = 4096;

/// 문자열 쌍 → 유사도 캐시
#[derive(Debug)]
pub struct SimilarityCache {
    entries: RwLock<HashMap<(String, String), f64>>,
    capacity: usize,
    enabled: bool,
}

impl SimilarityCache {
    pub fn new(enabled: bool) -> Self {
        Self::with_capacity(enabled, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(enabled: bool, capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
            enabled,
        }
    }

    /// 캐시된 값이 있으면 반환하고, 없으면 계산 후 저장
    ///
    /// 유사도는 대칭이므로 키는 (작은 쪽, 큰 쪽) 순서로 정규화
    pub fn get_or_compute<F>(&self, a: &str, b: &str, compute: F) -> f64
    where
        F: FnOnce(&str, &str) -> f64,
    {
        if !self.enabled {
            return compute(a, b);
        }
        let key = if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        };

        if let Some(&value) = self.entries.read().get(&key) {
            return value;
        }

        let value = compute(a, b);
        let mut entries = self.entries.write();
        if entries.len() >= self.capacity {
            log::trace!("similarity cache full ({} entries), clearing", entries.len());
            entries.clear();
        }
        entries.insert(key, value);
        value
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for SimilarityCache {
    fn default() -> Self {
        Self::new(true)
    }
}
