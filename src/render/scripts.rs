//! Inline browser scripts.

/// Cookie banner: remembers the choice under `localStorage.cookieConsent`.
pub const COOKIE_CONSENT: &str = r#"
(function(){
  var banner = document.getElementById('cookie-banner');
  if (!banner) return;
  if (!localStorage.getItem('cookieConsent')) banner.hidden = false;
  banner.querySelectorAll('[data-consent]').forEach(function(btn){
    btn.addEventListener('click', function(){
      localStorage.setItem('cookieConsent', btn.dataset.consent);
      banner.hidden = true;
    });
  });
})();
"#;

/// Debounced suggestion dropdown for every `.search-box`.
pub const SEARCH_BOX: &str = r#"
document.querySelectorAll('.search-box').forEach(function(form){
  var input = form.querySelector('input[name=search]');
  var list = form.querySelector('.suggestions');
  var wait = parseInt(form.dataset.debounce || '200', 10);
  var timer = null;
  input.addEventListener('input', function(){
    clearTimeout(timer);
    var q = input.value.trim();
    if (!q) { list.hidden = true; return; }
    timer = setTimeout(function(){
      fetch('/api/suggestions?q=' + encodeURIComponent(q))
        .then(function(r){ return r.json(); })
        .then(function(data){
          list.innerHTML = '';
          (data.popular || []).forEach(function(s){
            var li = document.createElement('li');
            li.textContent = s;
            li.addEventListener('mousedown', function(){ input.value = s; form.submit(); });
            list.appendChild(li);
          });
          list.hidden = list.children.length === 0;
        })
        .catch(function(){ list.hidden = true; });
    }, wait);
  });
  input.addEventListener('blur', function(){ setTimeout(function(){ list.hidden = true; }, 150); });
});
"#;

/// Demo form: course picker refresh and JSON submission to `/enroll`.
pub const DEMO_FORM: &str = r#"
document.querySelectorAll('form.demo-form').forEach(function(form){
  var picker = form.querySelector('.course-search');
  var options = form.querySelector('.course-options');
  var message = form.querySelector('.form-message');
  function selected(){
    return Array.prototype.map.call(form.querySelectorAll('input[name=courses]:checked'),
      function(c){ return parseInt(c.value, 10); });
  }
  if (picker) picker.addEventListener('input', function(){
    var keep = selected();
    fetch('/api/course-picker?q=' + encodeURIComponent(picker.value) + '&selected=' + keep.join(','))
      .then(function(r){ return r.json(); })
      .then(function(courses){
        options.querySelectorAll('label').forEach(function(l){
          var box = l.querySelector('input');
          if (!box.checked) l.remove();
        });
        courses.forEach(function(c){
          var label = document.createElement('label');
          var box = document.createElement('input');
          box.type = 'checkbox'; box.name = 'courses'; box.value = c.id;
          label.appendChild(box);
          label.appendChild(document.createTextNode(' ' + c.title));
          options.appendChild(label);
        });
      });
  });
  form.addEventListener('submit', function(ev){
    ev.preventDefault();
    var f = form.elements;
    var body = {
      name: f['name'].value, email: f['email'].value, phone: f['phone'].value,
      country_code: f['country_code'].value, courses: selected(),
      terms: f['terms'].checked, page: form.dataset.source
    };
    fetch('/enroll', {method: 'POST', headers: {'Content-Type': 'application/json'}, body: JSON.stringify(body)})
      .then(function(r){ return r.json(); })
      .then(function(res){
        message.textContent = res.message;
        message.className = 'form-message ' + (res.success ? 'ok' : 'error');
        if (res.success) form.reset();
      })
      .catch(function(){ message.textContent = 'Form submission failed'; });
  });
});
"#;

/// Footer newsletter sign-up through `/subscribe`.
pub const NEWSLETTER: &str = r#"
(function(){
  var form = document.getElementById('newsletter');
  if (!form) return;
  form.addEventListener('submit', function(ev){
    ev.preventDefault();
    var out = form.querySelector('.form-message');
    fetch('/subscribe', {method: 'POST', headers: {'Content-Type': 'application/json'},
      body: JSON.stringify({email: form.elements['email'].value})})
      .then(function(r){ return r.json(); })
      .then(function(res){ out.textContent = res.message; if (res.success) form.reset(); })
      .catch(function(){ out.textContent = 'Submission failed'; });
  });
})();
"#;
