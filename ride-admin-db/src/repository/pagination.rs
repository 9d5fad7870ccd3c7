use ride_admin_api::config::PaginationConfig;
use serde::{Deserialize, Serialize};

/// Pagination request parameters for offset-based pagination
///
/// # Example
/// ```
/// use ride_admin_db::repository::pagination::PageRequest;
///
/// let page_request = PageRequest::new(20, 0); // First page with 20 items
/// let next_page = PageRequest::new(20, 20); // Second page
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    /// Create a new page request
    ///
    /// # Arguments
    /// * `limit` - Maximum number of items to return
    /// * `offset` - Number of items to skip
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Create a page request for a specific page number (1-based)
    ///
    /// # Arguments
    /// * `page_size` - Number of items per page
    /// * `page_number` - Page number (1-based, will be converted to 0-based offset)
    ///
    /// # Example
    /// ```
    /// use ride_admin_db::repository::pagination::PageRequest;
    ///
    /// let page_1 = PageRequest::for_page(20, 1); // offset: 0
    /// let page_2 = PageRequest::for_page(20, 2); // offset: 20
    /// ```
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        let page_number = page_number.max(1); // Ensure page_number is at least 1
        Self {
            limit: page_size,
            offset: (page_number - 1).saturating_mul(page_size),
        }
    }

    /// Get the page number (1-based) for this request
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }

    /// Borrow the requested window of `data`, clipped to its bounds
    pub fn slice<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        let start = self.offset.min(data.len());
        let end = self.offset.saturating_add(self.limit).min(data.len());
        &data[start..end]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

/// Paginated response containing items and metadata
///
/// # Example
/// ```
/// use ride_admin_db::repository::pagination::Page;
///
/// let page = Page {
///     items: vec![1, 2, 3],
///     total: 100,
///     limit: 20,
///     offset: 0,
/// };
///
/// assert_eq!(page.has_more(), true);
/// assert_eq!(page.page_number(), 1);
/// assert_eq!(page.total_pages(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The items in this page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: usize,
    /// Maximum number of items per page
    pub limit: usize,
    /// Number of items skipped before this page
    pub offset: usize,
}

impl<T> Page<T> {
    /// Create a new page
    ///
    /// # Arguments
    /// * `items` - The items in this page
    /// * `total` - Total number of items across all pages
    /// * `limit` - Maximum number of items per page
    /// * `offset` - Number of items skipped before this page
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    /// Check if there are more pages after this one
    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }

    /// Get the current page number (1-based)
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }

    /// Get the total number of pages (never less than 1)
    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.limit)
    }

    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.offset == 0
    }

    /// Check if this is the last page
    pub fn is_last_page(&self) -> bool {
        !self.has_more()
    }
}

/// Number of pages needed for `total_items`; an empty collection still has one page
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        1
    } else {
        total_items.div_ceil(items_per_page).max(1)
    }
}

/// Window `[(page-1)*size, page*size)` of `data`, clipped to its bounds.
///
/// Out-of-range pages give an empty slice instead of an error; use a
/// [`Paginator`] to keep the page in range.
pub fn page<T>(data: &[T], current_page: usize, items_per_page: usize) -> &[T] {
    PageRequest::for_page(items_per_page, current_page).slice(data)
}

/// Display metadata for the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// 1-based index of the first item shown, 0 when there are no items
    pub start_item: usize,
    /// 1-based index of the last item shown
    pub end_item: usize,
    pub total_items: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

impl PaginationInfo {
    pub fn summary(&self) -> String {
        if self.total_items == 0 {
            "No items to display".to_string()
        } else {
            format!(
                "Showing {}-{} of {} items",
                self.start_item, self.end_item, self.total_items
            )
        }
    }
}

/// One slot of the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageMarker {
    Page(usize),
    /// Gap between page 1 and the window
    EllipsisStart,
    /// Gap between the window and the last page
    EllipsisEnd,
}

/// Self-correcting page state over a collection of known length.
///
/// The paginator never holds the data. Callers report the collection length
/// with [`Paginator::set_total_items`] whenever it may have changed and borrow
/// the visible window with [`Paginator::page`]. After every operation
/// `1 <= current_page <= total_pages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
    initial_page: usize,
    initial_items_per_page: usize,
    items_per_page_options: Vec<usize>,
    reset_page_on_data_change: bool,
    max_page_numbers: usize,
}

impl Paginator {
    pub fn new(config: &PaginationConfig) -> Self {
        let initial_items_per_page = config.initial_items_per_page.max(1);
        let mut paginator = Self {
            current_page: config.initial_page,
            items_per_page: initial_items_per_page,
            total_items: 0,
            initial_page: config.initial_page,
            initial_items_per_page,
            items_per_page_options: config.items_per_page_options.clone(),
            reset_page_on_data_change: config.reset_page_on_data_change,
            max_page_numbers: config.max_page_numbers,
        };
        paginator.clamp();
        paginator
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.items_per_page)
    }

    pub fn items_per_page_options(&self) -> &[usize] {
        &self.items_per_page_options
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::for_page(self.items_per_page, self.current_page)
    }

    /// Record the current collection length.
    ///
    /// A change in length resets to page 1 when configured to; otherwise the
    /// page is kept and clamped.
    pub fn set_total_items(&mut self, total_items: usize) {
        if total_items != self.total_items && self.reset_page_on_data_change {
            self.current_page = 1;
        }
        self.total_items = total_items;
        self.clamp();
    }

    /// Jump to `requested`, clamped to `[1, total_pages]`. Returns the page landed on.
    pub fn go_to_page(&mut self, requested: usize) -> usize {
        self.current_page = requested;
        self.clamp();
        self.current_page
    }

    pub fn next_page(&mut self) -> usize {
        if self.has_next_page() {
            self.current_page += 1;
        }
        self.current_page
    }

    pub fn previous_page(&mut self) -> usize {
        if self.has_previous_page() {
            self.current_page -= 1;
        }
        self.current_page
    }

    pub fn first_page(&mut self) -> usize {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> usize {
        self.go_to_page(self.total_pages())
    }

    /// Change the page size while keeping the first visible item on screen.
    ///
    /// Returns `(items_per_page, current_page)` after the change.
    pub fn change_items_per_page(&mut self, new_size: usize) -> (usize, usize) {
        let new_size = new_size.max(1);
        let first_visible = (self.current_page - 1) * self.items_per_page + 1;
        self.items_per_page = new_size;
        self.current_page = first_visible.div_ceil(new_size).max(1);
        self.clamp();
        (self.items_per_page, self.current_page)
    }

    /// Back to the configured initial page and page size
    pub fn reset(&mut self) {
        self.current_page = self.initial_page;
        self.items_per_page = self.initial_items_per_page;
        self.clamp();
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// The visible window of `data`.
    ///
    /// `data` is expected to have the length last given to
    /// [`Paginator::set_total_items`]; a shorter slice is clipped.
    pub fn page<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        self.request().slice(data)
    }

    /// The visible window as an owned [`Page`]
    pub fn to_page<T: Clone>(&self, data: &[T]) -> Page<T> {
        let request = self.request();
        Page::new(
            request.slice(data).to_vec(),
            data.len(),
            request.limit,
            request.offset,
        )
    }

    pub fn info(&self) -> PaginationInfo {
        let total_pages = self.total_pages();
        let start_item = if self.total_items == 0 {
            0
        } else {
            (self.current_page - 1) * self.items_per_page + 1
        };
        let end_item = self
            .current_page
            .saturating_mul(self.items_per_page)
            .min(self.total_items);

        PaginationInfo {
            start_item,
            end_item,
            total_items: self.total_items,
            current_page: self.current_page,
            total_pages,
            items_per_page: self.items_per_page,
            has_next_page: self.current_page < total_pages,
            has_previous_page: self.current_page > 1,
            is_first_page: self.current_page == 1,
            is_last_page: self.current_page == total_pages,
        }
    }

    /// Page-number strip with the configured window width
    pub fn page_numbers(&self) -> Vec<PageMarker> {
        page_numbers(self.current_page, self.total_pages(), self.max_page_numbers)
    }

    fn clamp(&mut self) {
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(&PaginationConfig::default())
    }
}

/// Numbered pages around `current_page`, at most `max_page_numbers` wide,
/// with page 1 and the last page always present and ellipses over gaps.
pub fn page_numbers(current_page: usize, total_pages: usize, max_page_numbers: usize) -> Vec<PageMarker> {
    let total_pages = total_pages.max(1);
    let current_page = current_page.clamp(1, total_pages);
    let max_page_numbers = max_page_numbers.max(1);
    let half_range = max_page_numbers / 2;

    let mut start_page = current_page.saturating_sub(half_range).max(1);
    let mut end_page = current_page.saturating_add(half_range).min(total_pages);

    if end_page - start_page + 1 < max_page_numbers {
        if start_page == 1 {
            end_page = max_page_numbers.min(total_pages);
        } else if end_page == total_pages {
            start_page = end_page.saturating_sub(max_page_numbers - 1).max(1);
        }
    }

    let mut markers = Vec::with_capacity(max_page_numbers.min(total_pages) + 4);
    if start_page > 1 {
        markers.push(PageMarker::Page(1));
        if start_page > 2 {
            markers.push(PageMarker::EllipsisStart);
        }
    }
    markers.extend((start_page..=end_page).map(PageMarker::Page));
    if end_page < total_pages {
        if end_page < total_pages - 1 {
            markers.push(PageMarker::EllipsisEnd);
        }
        markers.push(PageMarker::Page(total_pages));
    }
    markers
}
