/// Page bookkeeping for a list shown `per_page` rows at a time.
///
/// `total_pages` never drops below one, so an empty list still has a (blank)
/// first page and `page < total_pages` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
	pub page: usize,
	pub per_page: usize,
	pub total_pages: usize,
}

impl Paginator {
	#[must_use]
	pub fn new(per_page: usize, items: usize) -> Self {
		let mut paginator = Self {
			page: 0,
			per_page: per_page.max(1),
			total_pages: 1,
		};
		paginator.set_total_pages(items);
		paginator
	}

	/// Recompute the page count for `items` rows and clamp the current page.
	pub fn set_total_pages(&mut self, items: usize) {
		self.total_pages = items.div_ceil(self.per_page).max(1);
		self.page = self.page.min(self.total_pages - 1);
	}

	pub fn set_per_page(&mut self, per_page: usize, items: usize) {
		self.per_page = per_page.max(1);
		self.set_total_pages(items);
	}

	/// Page containing row `index`.
	#[must_use]
	pub fn page_of(&self, index: usize) -> usize {
		index / self.per_page
	}

	/// Move back one page. Returns `false` on the first page.
	pub fn prev_page(&mut self) -> bool {
		if self.page == 0 {
			return false;
		}
		self.page -= 1;
		true
	}

	/// Move forward one page. Returns `false` on the last page.
	pub fn next_page(&mut self) -> bool {
		if self.on_last_page() {
			return false;
		}
		self.page += 1;
		true
	}

	#[must_use]
	pub fn on_last_page(&self) -> bool {
		self.page + 1 >= self.total_pages
	}

	/// Half-open range of rows visible on the current page of a list of `len`.
	#[must_use]
	pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
		let start = (self.page * self.per_page).min(len);
		let end = (start + self.per_page).min(len);
		(start, end)
	}
}

impl Default for Paginator {
	fn default() -> Self {
		Self::new(1, 0)
	}
}
